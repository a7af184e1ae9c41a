use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub const LEADERBOARD_SIZE: usize = 10;
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: u32,
    pub difficulty: String,
    pub date: String,
}

impl ScoreEntry {
    pub fn new(player: &str, score: u32, difficulty: Difficulty, completed_at: DateTime<Local>) -> Self {
        Self {
            player: player.to_string(),
            score,
            difficulty: difficulty.display_name().to_string(),
            date: completed_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Top scores, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub scores: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Inserts the entry below every existing score that is at least as high,
    /// then truncates. Returns its 1-based rank, or `None` if it was cut.
    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        self.scores.sort_by(|a, b| b.score.cmp(&a.score));
        let pos = self
            .scores
            .iter()
            .take_while(|e| e.score >= entry.score)
            .count();
        self.scores.insert(pos, entry);
        self.scores.truncate(LEADERBOARD_SIZE);
        (pos < LEADERBOARD_SIZE).then_some(pos + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(player: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            player: player.to_string(),
            score,
            difficulty: "Easy".to_string(),
            date: "2026-10-18 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_entry_date_format() {
        let at = Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let e = ScoreEntry::new("ann", 12, Difficulty::Medium, at);
        assert_eq!(e.date, "2026-03-04 05:06:07");
        assert_eq!(e.difficulty, "Medium");
    }

    #[test]
    fn test_record_sorts_descending() {
        let mut board = Leaderboard::default();
        board.record(entry("a", 10));
        board.record(entry("b", 30));
        board.record(entry("c", 20));
        let scores: Vec<u32> = board.scores.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
    }

    #[test]
    fn test_record_keeps_top_ten() {
        let mut board = Leaderboard::default();
        for score in [5, 80, 3, 41, 17, 99, 0, 23, 64, 12, 50, 7, 38, 71, 2] {
            board.record(entry("p", score));
            assert!(board.len() <= LEADERBOARD_SIZE);
            assert!(board.scores.windows(2).all(|w| w[0].score >= w[1].score));
        }
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board.scores[0].score, 99);
        assert_eq!(board.scores[9].score, 12);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::default();
        board.record(entry("first", 40));
        board.record(entry("second", 40));
        assert_eq!(board.scores[0].player, "first");
        assert_eq!(board.scores[1].player, "second");
    }

    #[test]
    fn test_record_returns_rank() {
        let mut board = Leaderboard::default();
        assert_eq!(board.record(entry("high", 90)), Some(1));
        assert_eq!(board.record(entry("low", 1)), Some(2));
        assert_eq!(board.record(entry("mid", 50)), Some(2));
        assert_eq!(board.record(entry("tie", 90)), Some(2));
    }

    #[test]
    fn test_cut_entry_has_no_rank() {
        let mut board = Leaderboard::default();
        for score in (10..=100).step_by(10) {
            board.record(entry("p", score));
        }
        // Same value as the entry at rank 10; ties rank below, so it is cut.
        assert_eq!(board.scores[9], entry("p", 10));
        assert_eq!(board.record(entry("p", 10)), None);
        assert_eq!(board.record(entry("q", 5)), None);
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board.scores[9].player, "p");
    }

    #[test]
    fn test_record_resorts_unsorted_board() {
        let mut board = Leaderboard {
            scores: vec![entry("a", 5), entry("b", 40), entry("c", 20)],
        };
        assert_eq!(board.record(entry("d", 30)), Some(2));
        let scores: Vec<u32> = board.scores.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![40, 30, 20, 5]);
    }

    #[test]
    fn test_json_shape() {
        let mut board = Leaderboard::default();
        board.record(entry("ann", 25));
        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["scores"][0]["player"], "ann");
        assert_eq!(value["scores"][0]["score"], 25);
        assert_eq!(value["scores"][0]["difficulty"], "Easy");
        assert_eq!(value["scores"][0]["date"], "2026-10-18 12:00:00");
    }
}
