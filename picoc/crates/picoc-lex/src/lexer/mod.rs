//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - `LexicalAnalyzer` struct, dispatch and token pushback
//! - `whitespace` - whitespace skipping and line counting
//! - `operator` - two-character comparison operators
//! - `number` - integer, base-suffixed and real literals
//! - `identifier` - identifier and keyword scanning

mod core;
mod identifier;
mod number;
mod operator;
mod whitespace;

pub use self::core::LexicalAnalyzer;
