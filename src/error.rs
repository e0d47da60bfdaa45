//! Error types.
//!
//! Each concern gets its own enum so the front end can decide how loudly to
//! report it. Nothing here is fatal once the terminal UI is running.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or writing a setup document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid setup file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setup file: {0}")]
    Structure(String),
}

/// Failure while attaching a media file to a question slot.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read media {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rejected edit or transition on the setup screen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("at least one team is required to start the game")]
    NoTeams,

    #[error("at least one category is required")]
    NoCategories,

    #[error("the board needs at least one question")]
    NoQuestions,

    #[error("no category {0}")]
    NoSuchCategory(usize),

    #[error("no question at category {category}, slot {question}")]
    NoSuchQuestion { category: usize, question: usize },

    #[error("points must be a whole number, got {0:?}")]
    InvalidPoints(String),
}

/// Rejected action during play.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no question at category {category}, slot {question}")]
    NoSuchQuestion { category: usize, question: usize },

    #[error("that question has already been answered")]
    AlreadyAnswered,

    #[error("another question is still open")]
    QuestionOpen,

    #[error("the game is over")]
    Finished,
}

/// Failure while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for running the game.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("Failed to load setup: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
