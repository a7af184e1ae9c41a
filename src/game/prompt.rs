use thiserror::Error;

use crate::console::Console;
use crate::models::Difficulty;

pub const REPLAY_TOKEN: &str = "yes";

/// Recoverable input mistakes. The message is shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Name cannot be empty!")]
    EmptyName,

    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { min: u8, max: u8 },
}

/// Reads lines until `parse` accepts one. A rejected line prints its error and
/// asks again; there is no retry cap. Returns `None` only when input runs out.
pub fn prompt_until<T, F>(console: &mut dyn Console, prompt: &str, parse: F) -> Option<T>
where
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let line = console.read_line(prompt)?;
        match parse(&line) {
            Ok(value) => return Some(value),
            Err(e) => {
                console.print_line("");
                console.print_line(&e.to_string());
            }
        }
    }
}

pub fn parse_name(line: &str) -> Result<String, InputError> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_difficulty(line: &str) -> Result<Difficulty, InputError> {
    let choice = line.trim();
    if choice.is_empty() || !choice.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }

    choice
        .parse::<u8>()
        .ok()
        .and_then(Difficulty::from_level)
        .ok_or(InputError::OutOfRange {
            min: Difficulty::min_level(),
            max: Difficulty::max_level(),
        })
}

pub fn select_player_name(console: &mut dyn Console) -> Option<String> {
    prompt_until(console, "Enter your name: ", parse_name)
}

pub fn select_difficulty(console: &mut dyn Console) -> Option<Difficulty> {
    console.print_line("");
    let prompt = format!(
        "Choose difficulty ({}-{}): ",
        Difficulty::min_level(),
        Difficulty::max_level()
    );
    prompt_until(console, &prompt, parse_difficulty)
}

/// Only an exact "yes" (any case) continues.
pub fn offer_replay(console: &mut dyn Console) -> bool {
    console.print_line("");
    match console.read_line("Play again? (yes/no): ") {
        Some(answer) => answer.eq_ignore_ascii_case(REPLAY_TOKEN),
        None => false,
    }
}
