//! Identifier and keyword lexing.

use picoc_util::{DiagnosticBuilder, DiagnosticCode};

use crate::chars::{is_alnum, is_alpha};
use crate::source::CharSource;
use crate::token::{keyword_from_ident, Token, TokenType};
use crate::LexicalAnalyzer;

impl<S: CharSource> LexicalAnalyzer<'_, S> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter, followed by ASCII letters or
    /// digits. After reading the identifier, checks if it matches a reserved
    /// keyword.
    ///
    /// # Returns
    ///
    /// A keyword token (e.g. `IF`), an `ID`, or an `ERROR` with an empty
    /// lexeme if the next character is not a letter (that character is left
    /// in the source).
    pub fn scan_id_or_keyword(&mut self) -> Token {
        let line = self.line_no;

        let first = match self.source.next_char() {
            Some(c) if is_alpha(c) => c,
            other => {
                if let Some(c) = other {
                    self.source.unget_char(c);
                }
                self.report(
                    DiagnosticBuilder::error("expected a letter at the start of an identifier")
                        .code(DiagnosticCode::E_LEXER_EXPECTED_LETTER),
                );
                return Token::bare(TokenType::Error, line);
            },
        };

        let mut lexeme = String::from(first);
        while let Some(c) = self.source.next_char() {
            if !is_alnum(c) {
                self.source.unget_char(c);
                break;
            }
            lexeme.push(c);
        }

        let token_type = keyword_from_ident(&lexeme).unwrap_or(TokenType::Id);
        Token::new(token_type, lexeme, line)
    }
}
