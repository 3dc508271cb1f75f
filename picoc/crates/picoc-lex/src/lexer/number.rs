//! Number literal lexing.
//!
//! This module handles decimal integers, base-suffixed integers and real
//! literals.

use picoc_util::{DiagnosticBuilder, DiagnosticCode};
use tracing::trace;

use crate::chars::{is_digit, is_hex_digit, is_octal_digit};
use crate::config::Backtrack;
use crate::source::CharSource;
use crate::token::{Token, TokenType};
use crate::LexicalAnalyzer;

/// A base named by a literal's `x` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumberBase {
    Octal,
    Hex,
}

impl NumberBase {
    /// Maps the digits after `x` to a base. Only the exact codes count.
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "08" => Some(NumberBase::Octal),
            "16" => Some(NumberBase::Hex),
            _ => None,
        }
    }

    /// Returns true if every character of `body` is a digit of this base.
    fn accepts(self, body: &str) -> bool {
        match self {
            NumberBase::Octal => body.chars().all(is_octal_digit),
            NumberBase::Hex => body.chars().all(is_hex_digit),
        }
    }

    fn token_type(self) -> TokenType {
        match self {
            NumberBase::Octal => TokenType::Base08Num,
            NumberBase::Hex => TokenType::Base16Num,
        }
    }
}

impl<S: CharSource> LexicalAnalyzer<'_, S> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `0` (a leading `0` is always a literal on its own)
    /// - Octal: `17x08`, every body digit in `0`-`7`
    /// - Hexadecimal: `19x16`
    /// - Real: `3.14`
    ///
    /// When a suffix or fractional part fails to match, recovery follows
    /// [`ScanConfig::backtrack`](crate::ScanConfig::backtrack).
    ///
    /// # Returns
    ///
    /// A `NUM`, `BASE08NUM`, `BASE16NUM` or `REALNUM` token, or an `ERROR`
    /// with an empty lexeme if the next character is not a digit (that
    /// character is left in the source).
    pub fn scan_number(&mut self) -> Token {
        let line = self.line_no;

        let first = match self.source.next_char() {
            Some(c) if is_digit(c) => c,
            other => {
                if let Some(c) = other {
                    self.source.unget_char(c);
                }
                self.report(
                    DiagnosticBuilder::error("expected a digit at the start of a number")
                        .code(DiagnosticCode::E_LEXER_EXPECTED_DIGIT),
                );
                return Token::bare(TokenType::Error, line);
            },
        };

        let mut body = String::from(first);
        if first != '0' {
            self.take_digits(&mut body);
        }

        if let Some(token) = self.scan_base_suffix(&body) {
            return token;
        }

        self.scan_fraction(body)
    }

    /// Appends a maximal run of digits to `buf`; the terminator is restored.
    fn take_digits(&mut self, buf: &mut String) {
        while let Some(c) = self.source.next_char() {
            if !is_digit(c) {
                self.source.unget_char(c);
                break;
            }
            buf.push(c);
        }
    }

    /// Tries to read an `x08` or `x16` suffix after `body`.
    fn scan_base_suffix(&mut self, body: &str) -> Option<Token> {
        match self.source.next_char() {
            Some('x') => {},
            Some(c) => {
                self.source.unget_char(c);
                return None;
            },
            None => return None,
        }

        let mut code = String::new();
        self.take_digits(&mut code);

        if let Some(base) = NumberBase::from_code(&code).filter(|b| b.accepts(body)) {
            return Some(Token::new(
                base.token_type(),
                format!("{}x{}", body, code),
                self.line_no,
            ));
        }

        match self.config.backtrack {
            Backtrack::Legacy => {
                trace!(body, code = %code, "base suffix rejected");
                self.report(
                    DiagnosticBuilder::warning(format!(
                        "`x{}` is not a valid base suffix for `{}` and was dropped",
                        code, body
                    ))
                    .code(DiagnosticCode::W_LEXER_DROPPED_BASE_SUFFIX)
                    .note("only `x08` (digits 0-7) and `x16` name a base"),
                );
            },
            Backtrack::Restore => {
                for c in code.chars().rev() {
                    self.source.unget_char(c);
                }
                self.source.unget_char('x');
            },
        }
        None
    }

    /// Tries to extend `body` with a fractional part.
    fn scan_fraction(&mut self, mut body: String) -> Token {
        let line = self.line_no;

        match self.source.next_char() {
            Some('.') => {},
            Some(c) => {
                self.source.unget_char(c);
                return Token::new(TokenType::Num, body, line);
            },
            None => return Token::new(TokenType::Num, body, line),
        }

        match self.source.next_char() {
            Some(c) if is_digit(c) => {
                body.push('.');
                body.push(c);
                self.take_digits(&mut body);
                Token::new(TokenType::RealNum, body, line)
            },
            other => match self.config.backtrack {
                Backtrack::Legacy => {
                    self.report(
                        DiagnosticBuilder::error(format!("expected a digit after `{}.`", body))
                            .code(DiagnosticCode::E_LEXER_MALFORMED_REAL)
                            .help(format!("write `{}.0` for a real literal", body)),
                    );
                    if let Some(c) = other {
                        self.drop_char(c);
                    }
                    Token::bare(TokenType::Error, line)
                },
                Backtrack::Restore => {
                    if let Some(c) = other {
                        self.source.unget_char(c);
                    }
                    self.source.unget_char('.');
                    Token::new(TokenType::Num, body, line)
                },
            },
        }
    }
}
