//! Error types for the employee directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] used by configuration, storage and the CLI. Transport failures have
//! their own type, [`ApiError`](crate::api::ApiError), which converts into
//! [`DirectoryError::Api`] with `?`.
//!
//! The data store never returns these errors; it folds every failure into its
//! `Error` status instead.

use crate::api::ApiError;
use thiserror::Error;

/// The main error type for employee directory operations.
///
/// # Examples
///
/// ```
/// use employee_directory::DirectoryError;
///
/// fn validate_limit(limit: u32) -> Result<u32, DirectoryError> {
///     if limit == 0 {
///         return Err(DirectoryError::Config("page_limit must be positive".to_string()));
///     }
///     Ok(limit)
/// }
///
/// assert!(validate_limit(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Key/value storage operation failed.
    ///
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request to the employee API failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A value could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No employee exists with this identifier.
    #[error("Employee {0} not found")]
    EmployeeNotFound(u64),
}

/// A specialized `Result` type for employee directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
