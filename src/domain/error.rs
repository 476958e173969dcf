//! Error types for bloodref.
//!
//! This module defines the centralized error type [`BloodRefError`] and a type alias
//! [`Result`] used throughout the crate. Searching itself never fails; these errors
//! come from manifest parsing, configuration, theme loading and the command line.

use thiserror::Error;

/// The main error type for bloodref operations.
///
/// Most variants carry a human-readable description. I/O failures wrap the
/// underlying `std::io::Error` through `#[from]` so `?` works on filesystem calls.
///
/// # Examples
///
/// ```
/// use bloodref::BloodRefError;
///
/// fn lookup(id: u32) -> Result<(), BloodRefError> {
///     Err(BloodRefError::NotFound(format!("chapter {id}")))
/// }
///
/// assert_eq!(lookup(99).unwrap_err().to_string(), "Not found: chapter 99");
/// ```
#[derive(Debug, Error)]
pub enum BloodRefError {
    /// The content manifest is malformed or violates an invariant.
    ///
    /// Raised for TOML syntax errors, missing fields, duplicate chapter ids
    /// and ids that are not positive.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested record does not exist in the manifest.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command line arguments could not be interpreted.
    #[error("Usage error: {0}")]
    Usage(String),
}

/// A specialized `Result` type for bloodref operations.
pub type Result<T> = std::result::Result<T, BloodRefError>;
