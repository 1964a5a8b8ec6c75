//! Error types for the regime engine.
//!
//! Tax calculation itself is total and never fails: out-of-range inputs are
//! clamped rather than rejected. The errors below cover the only fallible
//! surface of the crate, which is building and loading tax-year policies.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the regime engine.
///
/// # Example
///
/// ```
/// use regime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
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

    /// A policy table was structurally invalid (unordered brackets, bad rates).
    #[error("Invalid policy '{policy}': {message}")]
    InvalidPolicy {
        /// The policy or table that failed validation.
        policy: String,
        /// A description of what made the policy invalid.
        message: String,
    },

    /// No tax-year policy is effective on the requested date.
    #[error("No tax-year policy effective on {date}")]
    PolicyNotFound {
        /// The date for which a policy was requested.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
