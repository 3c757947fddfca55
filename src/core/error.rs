//! Error types surfaced by the library.

use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

/// A value that could not be coerced to a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("'{value}' is not a number")]
    Invalid { value: String },
}

impl NumberError {
    pub fn invalid(value: impl Into<String>) -> Self {
        Self::Invalid {
            value: value.into(),
        }
    }
}

/// Failure to load the demo configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but is not a valid config. Keeps the file text and
    /// the offending byte range so the error can be pointed at.
    #[error("invalid config {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        message: String,
        text: String,
        span: Option<Range<usize>>,
    },
}
