use std::time::Instant;

use super::difficulty::Difficulty;

/// State of one round. Dropped when the round is won or attempts run out.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: String,
    pub difficulty: Difficulty,
    pub secret: u32,
    pub attempts_used: u32,
    pub hints_remaining: u32,
    pub last_guess: Option<i64>,
    pub started_at: Instant,
}

impl GameSession {
    pub fn new(player: String, difficulty: Difficulty, secret: u32) -> Self {
        Self {
            player,
            difficulty,
            secret,
            attempts_used: 0,
            hints_remaining: difficulty.hints(),
            last_guess: None,
            started_at: Instant::now(),
        }
    }

    pub fn attempts_left(&self) -> bool {
        self.attempts_used < self.difficulty.max_attempts()
    }
}
