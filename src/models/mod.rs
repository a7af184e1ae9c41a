pub mod difficulty;
pub mod score;
pub mod session;

pub use difficulty::Difficulty;
pub use score::{Leaderboard, ScoreEntry, LEADERBOARD_SIZE};
pub use session::GameSession;
