/// Error types shared across the clock, photo, and config modules
///
/// Each concern gets its own enum so callers can decide what is fatal:
/// - `HiraganaError` is a contract violation and should be surfaced loudly
/// - `PhotoError` is always recoverable (skip the file, keep rendering)
/// - `ConfigError` aborts startup

use std::path::PathBuf;
use thiserror::Error;

use crate::clock::NumberCategory;

/// Errors raised while transcribing numbers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HiraganaError {
    /// `value` is signed so years before 1 CE are reported as they are
    #[error("{value} is outside the {category:?} reading table")]
    OutOfRange { category: NumberCategory, value: i64 },
}

/// Errors raised by the photo catalogue and loader
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to scan {root}: {source}")]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to create photo directory {root}: {source}")]
    CreateDir {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error returned from `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("window error: {0}")]
    Gui(#[from] iced::Error),
}
