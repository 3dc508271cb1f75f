//! Error handling module for the picot CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Lexical problems in the scanned
//! text are not errors here; they arrive as `ERROR` tokens and diagnostics.

use picoc_util::SourceError;
use thiserror::Error;

/// Main error type for the picot CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of picot commands.
#[derive(Error, Debug)]
pub enum PicotError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the input could not be turned into a character source.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when `check` found lexical errors in the input.
    #[error("Scan failed: {errors} error(s) in {input}")]
    ScanFailed {
        /// Name of the scanned input.
        input: String,
        /// Number of error diagnostics.
        errors: usize,
    },
}

/// Result type alias using PicotError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, PicotError>;
