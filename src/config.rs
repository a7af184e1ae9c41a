use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_SCORES_FILE: &str = "scores.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub scores_file: PathBuf,
    /// Whether asking for a hint before the first guess still spends one.
    pub hint_requires_guess_charge: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            hint_requires_guess_charge: true,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("numguess").join("config.json"))
}

pub fn load_config() -> GameConfig {
    let Some(path) = get_config_path() else {
        return GameConfig::default();
    };
    if !path.exists() {
        return GameConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            GameConfig::default()
        }
    }
}

fn parse_config(contents: &str) -> GameConfig {
    serde_json::from_str(contents).unwrap_or_else(|e| {
        log::warn!("ignoring malformed config: {}", e);
        GameConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.scores_file, PathBuf::from("scores.json"));
        assert!(config.hint_requires_guess_charge);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config(r#"{ "scores_file": "/tmp/board.json" }"#);
        assert_eq!(config.scores_file, PathBuf::from("/tmp/board.json"));
        assert!(config.hint_requires_guess_charge);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = parse_config("{ not json");
        assert_eq!(config.scores_file, PathBuf::from("scores.json"));
    }

    #[test]
    fn test_hint_policy_override() {
        let config = parse_config(r#"{ "hint_requires_guess_charge": false }"#);
        assert!(!config.hint_requires_guess_charge);
    }
}
