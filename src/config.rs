//! Configuration file handling.
//!
//! Settings live in `config.toml` under the platform config directory:
//!
//! - Linux: `~/.config/trivia-board/config.toml`
//! - macOS: `~/Library/Application Support/trivia-board/config.toml`
//! - Windows: `%APPDATA%\trivia-board\config.toml`
//!
//! A missing file means defaults. Command-line flags are applied on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::DEFAULT_EXPORT_FILE;
use crate::error::ConfigError;
use crate::setup::{DEFAULT_CATEGORIES_COUNT, DEFAULT_QUESTIONS_PER_CATEGORY, DEFAULT_TEAM_COUNT};

const APP_DIR: &str = "trivia-board";
const LOG_FILE: &str = "trivia-board.log";

/// Longest countdown accepted, in seconds.
pub const MAX_TIMER_SECONDS: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Teams on a fresh setup screen.
    pub team_count: usize,
    /// Categories on a fresh setup screen.
    pub categories_count: usize,
    /// Question slots created for each new category.
    pub questions_per_category: usize,
    /// Countdown length when a question opens; 0 disables it.
    pub timer_seconds: u32,
    /// Close the question as soon as a team is scored.
    pub close_on_score: bool,
    /// Default path for export and import prompts.
    pub export_path: PathBuf,
    /// Where log output goes. Defaults to the config directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_count: DEFAULT_TEAM_COUNT,
            categories_count: DEFAULT_CATEGORIES_COUNT,
            questions_per_category: DEFAULT_QUESTIONS_PER_CATEGORY,
            timer_seconds: 30,
            close_on_score: true,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        Ok(dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_DIR))
    }

    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories_count == 0 {
            return Err(ConfigError::Invalid(
                "categories_count must be at least 1".to_string(),
            ));
        }
        if self.timer_seconds > MAX_TIMER_SECONDS {
            return Err(ConfigError::Invalid(format!(
                "timer_seconds must be at most {MAX_TIMER_SECONDS}"
            )));
        }
        Ok(())
    }

    /// Configured log file, or `trivia-board.log` in the config directory.
    pub fn log_file_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(LOG_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timer_seconds = 45\nclose_on_score = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timer_seconds, 45);
        assert!(!config.close_on_score);
        assert_eq!(config.categories_count, DEFAULT_CATEGORIES_COUNT);
        assert_eq!(config.export_path, PathBuf::from(DEFAULT_EXPORT_FILE));
    }

    #[test]
    fn test_zero_categories_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "categories_count = 0\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "team_count = \"many\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_explicit_log_file() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/board.log")),
            ..Config::default()
        };
        assert_eq!(
            config.log_file_path().unwrap(),
            PathBuf::from("/tmp/board.log")
        );
    }
}
