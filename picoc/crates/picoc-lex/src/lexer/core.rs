//! Core lexer implementation.
//!
//! This module contains the `LexicalAnalyzer` struct, the main dispatch and
//! the token pushback stack.

use picoc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
use tracing::trace;

use crate::chars::{is_alpha, is_digit};
use crate::config::ScanConfig;
use crate::source::{CharSource, InputBuffer};
use crate::token::{Token, TokenType};

/// Scanner for Pico source.
///
/// Reads characters from a [`CharSource`] and classifies them into
/// [`Token`]s one at a time. Tokens handed back through
/// [`unget_token`](Self::unget_token) are replayed before any new input is
/// read, which lets a parser look arbitrarily far ahead.
///
/// # Example
///
/// ```
/// use picoc_lex::{LexicalAnalyzer, TokenType};
/// use picoc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = LexicalAnalyzer::new("IF x <> 10", &handler);
///
/// let t1 = lexer.get_token();
/// let t2 = lexer.get_token();
/// assert_eq!(t1.token_type, TokenType::If);
/// assert_eq!(t2.lexeme, "x");
///
/// // Push back in reverse order of retrieval.
/// lexer.unget_token(t2.clone());
/// lexer.unget_token(t1.clone());
/// assert_eq!(lexer.get_token(), t1);
/// assert_eq!(lexer.get_token(), t2);
/// assert_eq!(lexer.get_token().token_type, TokenType::NotEqual);
/// ```
pub struct LexicalAnalyzer<'a, S = InputBuffer> {
    /// Character source being scanned.
    pub(crate) source: S,

    /// Collector for lexical diagnostics.
    handler: &'a Handler,

    /// Scanner options.
    pub(crate) config: ScanConfig,

    /// Current line number (1-based).
    pub(crate) line_no: u32,

    /// Tokens returned by the caller, most recent last.
    pending: Vec<Token>,
}

impl<'a> LexicalAnalyzer<'a, InputBuffer> {
    /// Creates a scanner over the given source text.
    pub fn new(source: &str, handler: &'a Handler) -> Self {
        Self::from_source(InputBuffer::new(source), handler)
    }
}

impl<'a, S: CharSource> LexicalAnalyzer<'a, S> {
    /// Creates a scanner over any character source.
    pub fn from_source(source: S, handler: &'a Handler) -> Self {
        Self {
            source,
            handler,
            config: ScanConfig::default(),
            line_no: 1,
            pending: Vec::new(),
        }
    }

    /// Replaces the scanner configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the next token.
    ///
    /// Pushed-back tokens are returned first, newest first, without touching
    /// the source or the line counter. Otherwise whitespace is skipped and
    /// the leading character selects the scanning routine. Problems never
    /// abort scanning; they produce an `ERROR` token and a diagnostic.
    pub fn get_token(&mut self) -> Token {
        if let Some(token) = self.pending.pop() {
            trace!(token = %token, "replaying pushed-back token");
            return token;
        }

        self.skip_space();
        let line = self.line_no;

        let Some(c) = self.source.next_char() else {
            return Token::bare(TokenType::EndOfFile, line);
        };

        match c {
            '.' => Token::bare(TokenType::Dot, line),
            '+' => Token::bare(TokenType::Plus, line),
            '-' => Token::bare(TokenType::Minus, line),
            '/' => Token::bare(TokenType::Div, line),
            '*' => Token::bare(TokenType::Mult, line),
            '=' => Token::bare(TokenType::Equal, line),
            ':' => Token::bare(TokenType::Colon, line),
            ',' => Token::bare(TokenType::Comma, line),
            ';' => Token::bare(TokenType::Semicolon, line),
            '[' => Token::bare(TokenType::LBrac, line),
            ']' => Token::bare(TokenType::RBrac, line),
            '(' => Token::bare(TokenType::LParen, line),
            ')' => Token::bare(TokenType::RParen, line),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            c if is_digit(c) => {
                self.source.unget_char(c);
                self.scan_number()
            },
            c if is_alpha(c) => {
                self.source.unget_char(c);
                self.scan_id_or_keyword()
            },
            c => {
                self.report(
                    DiagnosticBuilder::error(format!("unexpected character {:?}", c))
                        .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
                );
                Token::bare(TokenType::Error, line)
            },
        }
    }

    /// Pushes a previously returned token back onto the stream.
    ///
    /// Tokens must be returned in the reverse of the order they were
    /// retrieved; the scanner does not check this. Returns the token's type.
    pub fn unget_token(&mut self, token: Token) -> TokenType {
        let token_type = token.token_type;
        trace!(token = %token, depth = self.pending.len() + 1, "token pushed back");
        self.pending.push(token);
        token_type
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line_no
    }

    /// Returns the number of pushed-back tokens waiting to be replayed.
    pub fn pending_tokens(&self) -> usize {
        self.pending.len()
    }

    /// Records a diagnostic at the current line.
    pub(crate) fn report(&self, diagnostic: DiagnosticBuilder) {
        diagnostic.line(self.line_no).emit(self.handler);
    }

    /// Discards a character read by a failed lookahead, keeping the line
    /// count in step with what was consumed.
    pub(crate) fn drop_char(&mut self, c: char) {
        trace!(dropped = ?c, line = self.line_no, "lookahead character dropped");
        if c == '\n' {
            self.line_no += 1;
        }
    }
}

impl<S: CharSource> Iterator for LexicalAnalyzer<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
