//! Centralized error handling for the bikeshare explorer.
//!
//! All library operations return [`Result`], whose error is the [`BikeshareError`]
//! enum. Conversions from the underlying libraries are provided through `From`, so
//! the `?` operator works across polars, I/O and JSON boundaries:
//!
//! ```no_run
//! use bikeshare::config::ExplorerConfig;
//! use bikeshare::error::Result;
//!
//! fn page_size(path: &std::path::Path) -> Result<usize> {
//!     Ok(ExplorerConfig::load(path)?.page_size)
//! }
//! ```
//!
//! Invalid filter input is never an error: the controller re-prompts instead.

use crate::explore::types::City;
use std::fmt;
use std::path::PathBuf;

/// Main error type for explorer operations.
#[derive(Debug)]
pub enum BikeshareError {
    /// I/O errors (console, file system)
    Io(std::io::Error),

    /// The backing source for a city could not be read
    DataUnavailable {
        city: City,
        path: PathBuf,
        reason: String,
    },

    /// A required column is absent from a city's source
    MissingColumn { city: City, column: String },

    /// Data processing errors (polars, timestamp parsing, etc.)
    DataProcessing(String),

    /// Configuration errors
    Config(String),

    /// Console input ended before an answer was given
    Aborted,
}

impl fmt::Display for BikeshareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataUnavailable { city, path, reason } => write!(
                f,
                "Data for {city} is unavailable ({}): {reason}",
                path.display()
            ),
            Self::MissingColumn { city, column } => {
                write!(f, "Data for {city} has no '{column}' column")
            }
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Aborted => write!(f, "Input closed by user"),
        }
    }
}

impl std::error::Error for BikeshareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BikeshareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for BikeshareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for BikeshareError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for explorer operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;
