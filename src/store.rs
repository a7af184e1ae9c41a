use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::console::Console;
use crate::display::format_leaderboard;
use crate::models::{Leaderboard, ScoreEntry};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace {path}: {source}")]
    Persist { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable home of the leaderboard. Every call reads or writes the whole board.
pub trait ScoreStore {
    /// Creates an empty board if nothing is stored yet. Idempotent.
    fn ensure_initialized(&self) -> Result<()>;

    fn load(&self) -> Result<Leaderboard>;

    fn save(&self, board: &Leaderboard) -> Result<()>;
}

/// Board kept as a pretty-printed JSON document, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        log::debug!("creating empty leaderboard at {}", self.path.display());
        fs::create_dir_all(self.parent_dir())?;
        self.save(&Leaderboard::default())
    }

    fn load(&self) -> Result<Leaderboard> {
        log::debug!("loading leaderboard from {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, board: &Leaderboard) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        serde_json::to_writer_pretty(&mut tmp, board)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;
        log::debug!(
            "saved {} entries to {}",
            board.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Read-modify-write of one new score, returning its rank when it made the
/// board. Failures are shown to the player and swallowed; the round ends
/// normally either way.
pub fn record_score(store: &dyn ScoreStore, entry: ScoreEntry, console: &mut dyn Console) -> Option<usize> {
    let result = store.load().and_then(|mut board| {
        let rank = board.record(entry);
        store.save(&board)?;
        Ok(rank)
    });

    match result {
        Ok(rank) => rank,
        Err(e) => {
            log::warn!("score not saved: {}", e);
            console.print_line("");
            console.print_line(&format!("Error saving score: {}", e));
            None
        }
    }
}

pub fn render(store: &dyn ScoreStore, console: &mut dyn Console) {
    match store.load() {
        Ok(board) => {
            for line in format_leaderboard(&board) {
                console.print_line(&line);
            }
        }
        Err(e) => {
            log::warn!("leaderboard not loaded: {}", e);
            console.print_line("");
            console.print_line(&format!("Error loading scores: {}", e));
        }
    }
}

pub fn ensure_initialized(store: &dyn ScoreStore, console: &mut dyn Console) {
    if let Err(e) = store.ensure_initialized() {
        log::warn!("leaderboard not initialized: {}", e);
        console.print_line(&format!("Error creating scores file: {}", e));
    }
}
