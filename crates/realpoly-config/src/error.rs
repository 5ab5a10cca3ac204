//! Errors raised while reading a settings file.

use std::path::PathBuf;

use realpoly::PolyError;
use thiserror::Error;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid settings JSON.
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// `Epsilon` was given as a string that is not a number.
    #[error("epsilon {0:?} is not a number")]
    NotANumber(String),

    /// `Epsilon` parsed but is not a usable tolerance.
    #[error(transparent)]
    InvalidEpsilon(#[from] PolyError),
}
