//! Error types for the categorization engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration loading and the remote holiday fetch produce errors;
//! the categorization operations themselves are total functions and return
//! plain values.

use thiserror::Error;

/// The main error type for the categorization engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/codes.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/codes.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the validation failure.
        message: String,
    },

    /// The remote holiday source could not be reached or returned bad data.
    ///
    /// This error never escapes the holiday calendar: it is logged and the
    /// locally computed holiday list is used instead.
    #[error("Remote holiday fetch failed: {message}")]
    HolidayFetch {
        /// A description of the fetch failure.
        message: String,
    },
}

impl From<reqwest::Error> for EngineError {
    fn from(e: reqwest::Error) -> Self {
        EngineError::HolidayFetch {
            message: e.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
