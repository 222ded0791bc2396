//! Error types for the employee records core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the attendance and promotion operations can report.

use thiserror::Error;

/// The main error type for the employee records core.
///
/// Nothing in the core retries; every variant is propagated to the caller,
/// which decides on user-facing messaging.
///
/// # Example
///
/// ```
/// use employee_records::error::RecordsError;
///
/// let error = RecordsError::NotFound {
///     entity: "employee",
///     id: 42,
/// };
/// assert_eq!(error.to_string(), "employee 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsError {
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

    /// Malformed or missing required input. Nothing was persisted.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The offending input field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A referenced row does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of row that was looked up.
        entity: &'static str,
        /// The identifier that was looked up.
        id: u64,
    },

    /// A uniqueness rule was violated. The row already on file is untouched.
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the clashing key.
        message: String,
    },

    /// An atomic unit of work could not be committed. No part of it is visible.
    #[error("Transaction failed: {message}")]
    Transaction {
        /// Why the unit was aborted.
        message: String,
    },
}

impl RecordsError {
    /// Shorthand for a [`RecordsError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return RecordsError.
pub type RecordsResult<T> = Result<T, RecordsError>;
