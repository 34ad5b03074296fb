//! Error types for the business rules engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the salary and issue rules can report.

use thiserror::Error;

/// The main error type for the business rules engine.
///
/// All fallible operations in the crate return this error type. Every variant
/// describes a programmer error to be fixed at the call site rather than
/// recovered from at runtime.
///
/// # Example
///
/// ```
/// use business_rules::error::EngineError;
///
/// let error = EngineError::MissingArgument {
///     argument: "employee".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required argument is missing: employee");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input was not supplied.
    #[error("Required argument is missing: {argument}")]
    MissingArgument {
        /// The name of the missing argument.
        argument: String,
    },

    /// An issue was constructed without a usable description.
    #[error("issue description cannot be null or whitespace")]
    InvalidIssueDescription,

    /// An issue timestamp falls outside the years a key can encode.
    #[error("Issue creation year {year} is outside 0000..=9999")]
    InvalidIssueTimestamp {
        /// The rejected year.
        year: i32,
    },

    /// A string could not be parsed as an issue key.
    #[error("Invalid issue key '{key}': {message}")]
    InvalidIssueKey {
        /// The rejected key text.
        key: String,
        /// A description of what made the key invalid.
        message: String,
    },

    /// An employee record contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

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
}

impl EngineError {
    /// Shorthand for a [`EngineError::MissingArgument`] naming `argument`.
    pub fn missing(argument: &str) -> Self {
        EngineError::MissingArgument {
            argument: argument.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
