//! Operator lexing.
//!
//! This module handles the comparison operators that need one character of
//! lookahead. Single-character punctuation is dispatched directly in `core`.

use crate::source::CharSource;
use crate::token::{Token, TokenType};
use crate::LexicalAnalyzer;

impl<S: CharSource> LexicalAnalyzer<'_, S> {
    /// Lexes less, less-equals, or not-equals. The `<` is already consumed.
    ///
    /// Handles: `<`, `<=`, `<>`
    pub(crate) fn lex_less(&mut self) -> Token {
        let token_type = match self.source.next_char() {
            Some('=') => TokenType::LtEq,
            Some('>') => TokenType::NotEqual,
            Some(c) => {
                self.source.unget_char(c);
                TokenType::Less
            },
            None => TokenType::Less,
        };
        Token::bare(token_type, self.line_no)
    }

    /// Lexes greater or greater-equals. The `>` is already consumed.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        let token_type = match self.source.next_char() {
            Some('=') => TokenType::GtEq,
            Some(c) => {
                self.source.unget_char(c);
                TokenType::Greater
            },
            None => TokenType::Greater,
        };
        Token::bare(token_type, self.line_no)
    }
}
