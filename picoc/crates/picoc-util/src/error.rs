//! Core error types for picoc-util crate
//!
//! This module defines error types for failures that stop scanning before it
//! starts. Lexical errors are never reported through these types.

use thiserror::Error;

/// Error type for character source construction
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the underlying stream failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes are not valid UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for character source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
