use crate::console::Terminal;
use crate::display::display_difficulties;

pub fn show_levels() {
    let mut terminal = Terminal::new();
    display_difficulties(&mut terminal);
    println!();
    println!("Score = range - 10 per attempt - 5 per second, never below 0");
    println!("Type 'h' during a round to spend a hint.");
}
