use crate::console::Console;
use crate::models::{Difficulty, Leaderboard, LEADERBOARD_SIZE};

const TABLE_WIDTH: usize = 51;

pub fn display_banner(console: &mut dyn Console) {
    console.print_line("");
    console.print_line("=== Number Guessing Game ===");
    console.print_line("");
}

pub fn describe_difficulty(difficulty: Difficulty) -> String {
    format!(
        "{}. {} (1-{}, {} attempts, {} hints)",
        difficulty.level(),
        difficulty.display_name(),
        difficulty.range(),
        difficulty.max_attempts(),
        difficulty.hints()
    )
}

pub fn display_difficulties(console: &mut dyn Console) {
    console.print_line("");
    console.print_line("Difficulty Levels:");
    for difficulty in Difficulty::ALL {
        console.print_line(&describe_difficulty(difficulty));
    }
}

pub fn format_leaderboard(board: &Leaderboard) -> Vec<String> {
    if board.is_empty() {
        return vec![String::new(), "No high scores yet!".to_string()];
    }

    let mut lines = vec![
        String::new(),
        "=== High Scores ===".to_string(),
        format!("{:<6}{:<20}{:<10}{:<15}", "Rank", "Player", "Score", "Difficulty"),
        "-".repeat(TABLE_WIDTH),
    ];
    for (i, entry) in board.scores.iter().take(LEADERBOARD_SIZE).enumerate() {
        lines.push(format!(
            "{:<6}{:<20}{:<10}{:<15}",
            i + 1,
            entry.player,
            entry.score,
            entry.difficulty
        ));
    }
    lines
}
