//! picoc-lex - Lexical Analyzer for the Pico Language
//!
//! This crate turns Pico source text into a stream of classified tokens for a
//! parser to consume. It does not check program structure; it only
//! classifies lexical units and records the line each one starts on.
//!
//! # Example Usage
//!
//! ```
//! use picoc_lex::{LexicalAnalyzer, TokenType};
//! use picoc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = LexicalAnalyzer::new("WHILE x > 0 DO x = x - 1;", &handler);
//!
//! let token = lexer.get_token();
//! assert_eq!(token.token_type, TokenType::While);
//!
//! // Look ahead one token, then put it back.
//! let next = lexer.get_token();
//! lexer.unget_token(next.clone());
//! assert_eq!(lexer.get_token(), next);
//!
//! // Or iterate until end of input
//! for token in &mut lexer {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and keyword lookup
//! - [`lexer`] - The scanner and its pushback stack
//! - [`source`] - Character sources with character-level pushback
//! - [`chars`] - Character classes
//! - [`config`] - Scanner options
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `IF`, `WHILE`, `DO`, `THEN`, `PRINT` (also accepted in lower case)
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z][a-zA-Z0-9]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0`
//! - **Octal**: `17x08`
//! - **Hexadecimal**: `19x16`
//! - **Real**: `3.14`
//!
//! ## Operators and Punctuation
//!
//! `+ - * / = : , ; . [ ] ( ) < > <= >= <>`
//!
//! ## Special
//!
//! - **END_OF_FILE**: End of input marker
//! - **ERROR**: Unrecognized or malformed input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod lexer;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{Backtrack, ScanConfig};
pub use lexer::LexicalAnalyzer;
pub use source::{CharSource, InputBuffer};
pub use token::{keyword_from_ident, Token, TokenType};

use picoc_util::Handler;

/// Scans a whole source text with the default configuration.
///
/// The returned tokens end with `END_OF_FILE`. Diagnostics are discarded;
/// use [`LexicalAnalyzer`] with your own [`Handler`] to keep them.
///
/// # Example
///
/// ```
/// use picoc_lex::{tokenize, TokenType};
///
/// let tokens = tokenize("PRINT 3.14;");
/// let types: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();
/// assert_eq!(
///     types,
///     vec![TokenType::Print, TokenType::RealNum, TokenType::Semicolon, TokenType::EndOfFile]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, ScanConfig::default(), &Handler::new())
}

/// Scans a whole source text, reporting into `handler`.
///
/// The returned tokens end with `END_OF_FILE`.
pub fn tokenize_with(source: &str, config: ScanConfig, handler: &Handler) -> Vec<Token> {
    let mut lexer = LexicalAnalyzer::new(source, handler).with_config(config);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.get_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
