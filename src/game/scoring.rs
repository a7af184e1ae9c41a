use crate::models::Difficulty;

const ATTEMPT_PENALTY: f64 = 10.0;
const SECOND_PENALTY: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    VeryClose,
    GettingWarmer,
    QuiteFar,
}

impl Hint {
    pub fn message(&self) -> &'static str {
        match self {
            Hint::VeryClose => "You're very close! Within 10 numbers.",
            Hint::GettingWarmer => "Getting warmer! Within 25 numbers.",
            Hint::QuiteFar => "You're quite far! More than 25 numbers away.",
        }
    }
}

/// Tier depends only on the distance; both bounds are inclusive.
pub fn compute_hint(secret: u32, guess: i64) -> Hint {
    let diff = i64::from(secret).abs_diff(guess);
    if diff <= 10 {
        Hint::VeryClose
    } else if diff <= 25 {
        Hint::GettingWarmer
    } else {
        Hint::QuiteFar
    }
}

/// `range - attempts*10 - seconds*5`, floored and never below zero.
pub fn compute_score(difficulty: Difficulty, attempts_used: u32, elapsed_secs: f64) -> u32 {
    let raw = f64::from(difficulty.range())
        - f64::from(attempts_used) * ATTEMPT_PENALTY
        - elapsed_secs.max(0.0) * SECOND_PENALTY;
    if raw <= 0.0 {
        0
    } else {
        raw.floor() as u32
    }
}
