use std::cmp::Ordering;
use std::num::IntErrorKind;
use std::time::{Duration, Instant};

use crate::console::Console;
use crate::models::GameSession;

use super::scoring::compute_hint;

pub const HINT_TOKEN: &str = "h";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    Won { attempts: u32, elapsed: Duration },
    Lost { secret: u32 },
    /// Input closed mid-round.
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Hint,
    Guess(i64),
    Invalid,
}

fn parse_turn(line: &str) -> Turn {
    let input = line.trim().to_lowercase();
    if input == HINT_TOKEN {
        return Turn::Hint;
    }
    // Integers too wide for i64 still count; saturating keeps their direction.
    match input.parse::<i64>() {
        Ok(guess) => Turn::Guess(guess),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Turn::Guess(i64::MAX),
            IntErrorKind::NegOverflow => Turn::Guess(i64::MIN),
            _ => Turn::Invalid,
        },
    }
}

/// Spends or refuses a hint. With `charge_without_guess` set, a hint asked
/// for before any guess still costs one charge.
fn request_hint(session: &mut GameSession, console: &mut dyn Console, charge_without_guess: bool) {
    console.print_line("");
    if session.hints_remaining == 0 {
        console.print_line("No hints remaining!");
        return;
    }

    match session.last_guess {
        Some(guess) => {
            let hint = compute_hint(session.secret, guess);
            console.print_line(&format!("Hint: {}", hint.message()));
            session.hints_remaining -= 1;
        }
        None => {
            console.print_line("Make a guess first to get a hint!");
            if charge_without_guess {
                session.hints_remaining -= 1;
            }
        }
    }
}

/// Plays guesses until the secret is found or attempts run out. The clock
/// starts here, so time spent choosing a name or level is free.
pub fn run_attempt_loop(
    session: &mut GameSession,
    console: &mut dyn Console,
    charge_hint_without_guess: bool,
) -> RoundOutcome {
    session.started_at = Instant::now();
    let max_attempts = session.difficulty.max_attempts();

    while session.attempts_left() {
        console.print_line("");
        console.print_line(&format!("Attempts: {}/{}", session.attempts_used, max_attempts));
        console.print_line(&format!("Hints remaining: {}", session.hints_remaining));

        console.print_line("");
        let Some(line) = console.read_line("Enter your guess (or 'h' for hint): ") else {
            return RoundOutcome::Abandoned;
        };

        let guess = match parse_turn(&line) {
            Turn::Hint => {
                request_hint(session, console, charge_hint_without_guess);
                continue;
            }
            Turn::Invalid => {
                console.print_line("");
                console.print_line("Please enter a valid number!");
                continue;
            }
            Turn::Guess(guess) => guess,
        };

        session.last_guess = Some(guess);
        session.attempts_used += 1;

        match guess.cmp(&i64::from(session.secret)) {
            Ordering::Equal => {
                return RoundOutcome::Won {
                    attempts: session.attempts_used,
                    elapsed: session.started_at.elapsed(),
                };
            }
            Ordering::Less => {
                console.print_line("");
                console.print_line("Too low!");
            }
            Ordering::Greater => {
                console.print_line("");
                console.print_line("Too high!");
            }
        }
    }

    console.print_line("");
    console.print_line(&format!("😢 Game Over! The number was {}", session.secret));
    RoundOutcome::Lost {
        secret: session.secret,
    }
}
