//! Common types and utilities for picot commands.
//!
//! This module provides shared types and utility functions used across all
//! command implementations to ensure consistency.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use picoc_lex::{Backtrack, InputBuffer, ScanConfig, Token};
use serde::Deserialize;

use crate::error::{PicotError, Result};

/// Name shown for input read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{lexeme , TYPE , line}` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Writes one token in this format, followed by a newline.
    pub fn write_token<W: Write>(self, out: &mut W, token: &Token) -> Result<()> {
        match self {
            Self::Text => writeln!(out, "{}", token)?,
            Self::Json => {
                serde_json::to_writer(&mut *out, token)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

// ============================================================================
// Input
// ============================================================================

/// Reads the whole input into a character source.
///
/// `None` reads standard input.
///
/// # Returns
/// * `Result<(String, InputBuffer)>` - Display name of the input and its text
pub fn read_source(input: Option<&Path>) -> Result<(String, InputBuffer)> {
    match input {
        Some(path) => {
            if !path.is_file() {
                return Err(PicotError::Validation(format!(
                    "Input path is not a file: {}",
                    path.display()
                )));
            }
            let buffer = InputBuffer::from_reader(File::open(path)?)?;
            Ok((path.display().to_string(), buffer))
        },
        None => {
            let buffer = InputBuffer::from_reader(io::stdin().lock())?;
            Ok((STDIN_NAME.to_string(), buffer))
        },
    }
}

/// Applies the `--restore` flag on top of the configured scanner options.
pub fn scan_config(config: ScanConfig, restore: bool) -> ScanConfig {
    if restore {
        config.with_backtrack(Backtrack::Restore)
    } else {
        config
    }
}
