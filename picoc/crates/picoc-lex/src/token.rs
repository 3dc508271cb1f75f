//! Token definitions.
//!
//! A [`Token`] is a plain value: the matched text, its [`TokenType`] and the
//! line the token started on. Keyword recognition goes through an explicit
//! dictionary ([`keyword_from_ident`]) rather than through the position of a
//! keyword in a list.

use std::fmt;
use std::sync::LazyLock;

use picoc_util::FxHashMap;

/// Classification of a token.
///
/// The declaration order is part of the public contract: [`ordinal`]
/// returns the position below, and ordinals 1 through 5 are the keywords.
///
/// [`ordinal`]: TokenType::ordinal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenType {
    /// End of input
    EndOfFile = 0,
    /// `IF`
    If = 1,
    /// `WHILE`
    While = 2,
    /// `DO`
    Do = 3,
    /// `THEN`
    Then = 4,
    /// `PRINT`
    Print = 5,
    /// `+`
    Plus = 6,
    /// `-`
    Minus = 7,
    /// `/`
    Div = 8,
    /// `*`
    Mult = 9,
    /// `=`
    Equal = 10,
    /// `:`
    Colon = 11,
    /// `,`
    Comma = 12,
    /// `;`
    Semicolon = 13,
    /// `[`
    LBrac = 14,
    /// `]`
    RBrac = 15,
    /// `(`
    LParen = 16,
    /// `)`
    RParen = 17,
    /// `<>`
    NotEqual = 18,
    /// `>`
    Greater = 19,
    /// `<`
    Less = 20,
    /// `<=`
    LtEq = 21,
    /// `>=`
    GtEq = 22,
    /// `.`
    Dot = 23,
    /// Decimal integer literal
    Num = 24,
    /// Identifier
    Id = 25,
    /// Unrecognized or malformed input
    Error = 26,
    /// Literal with a fractional part, `3.14`
    RealNum = 27,
    /// Octal literal with suffix, `17x08`
    Base08Num = 28,
    /// Hexadecimal literal with suffix, `19x16`
    Base16Num = 29,
}

impl TokenType {
    /// Every token type in declaration order.
    pub const ALL: [TokenType; 30] = [
        TokenType::EndOfFile,
        TokenType::If,
        TokenType::While,
        TokenType::Do,
        TokenType::Then,
        TokenType::Print,
        TokenType::Plus,
        TokenType::Minus,
        TokenType::Div,
        TokenType::Mult,
        TokenType::Equal,
        TokenType::Colon,
        TokenType::Comma,
        TokenType::Semicolon,
        TokenType::LBrac,
        TokenType::RBrac,
        TokenType::LParen,
        TokenType::RParen,
        TokenType::NotEqual,
        TokenType::Greater,
        TokenType::Less,
        TokenType::LtEq,
        TokenType::GtEq,
        TokenType::Dot,
        TokenType::Num,
        TokenType::Id,
        TokenType::Error,
        TokenType::RealNum,
        TokenType::Base08Num,
        TokenType::Base16Num,
    ];

    /// Returns the position of this type in the declaration order.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the symbolic name used in token dumps, e.g. `"LTEQ"`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::EndOfFile => "END_OF_FILE",
            TokenType::If => "IF",
            TokenType::While => "WHILE",
            TokenType::Do => "DO",
            TokenType::Then => "THEN",
            TokenType::Print => "PRINT",
            TokenType::Plus => "PLUS",
            TokenType::Minus => "MINUS",
            TokenType::Div => "DIV",
            TokenType::Mult => "MULT",
            TokenType::Equal => "EQUAL",
            TokenType::Colon => "COLON",
            TokenType::Comma => "COMMA",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::LBrac => "LBRAC",
            TokenType::RBrac => "RBRAC",
            TokenType::LParen => "LPAREN",
            TokenType::RParen => "RPAREN",
            TokenType::NotEqual => "NOTEQUAL",
            TokenType::Greater => "GREATER",
            TokenType::Less => "LESS",
            TokenType::LtEq => "LTEQ",
            TokenType::GtEq => "GTEQ",
            TokenType::Dot => "DOT",
            TokenType::Num => "NUM",
            TokenType::Id => "ID",
            TokenType::Error => "ERROR",
            TokenType::RealNum => "REALNUM",
            TokenType::Base08Num => "BASE08NUM",
            TokenType::Base16Num => "BASE16NUM",
        }
    }

    /// Returns true for the five reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenType::If | TokenType::While | TokenType::Do | TokenType::Then | TokenType::Print
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified unit of input.
///
/// # Example
///
/// ```
/// use picoc_lex::{Token, TokenType};
///
/// let token = Token::new(TokenType::Num, "42", 3);
/// assert_eq!(token.to_string(), "{42 , NUM , 3}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The matched text; empty for operators, punctuation, `ERROR` and
    /// `END_OF_FILE`.
    pub lexeme: String,
    /// The token's classification.
    pub token_type: TokenType,
    /// 1-based line on which the token's first character appeared.
    pub line_no: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, line_no: u32) -> Self {
        Self {
            lexeme: lexeme.into(),
            token_type,
            line_no,
        }
    }

    /// Creates a token with an empty lexeme.
    pub fn bare(token_type: TokenType, line_no: u32) -> Self {
        Self::new(token_type, String::new(), line_no)
    }

    /// Returns true if this token marks the end of input.
    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::EndOfFile
    }

    /// Returns true if this token is an `ERROR`.
    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::Error
    }
}

/// Renders as `{lexeme , NAME , line}`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} , {} , {}}}",
            self.lexeme,
            self.token_type.name(),
            self.line_no
        )
    }
}

/// Reserved spellings and the token type each one produces.
const KEYWORD_SPELLINGS: [(&str, TokenType); 10] = [
    ("IF", TokenType::If),
    ("WHILE", TokenType::While),
    ("DO", TokenType::Do),
    ("THEN", TokenType::Then),
    ("PRINT", TokenType::Print),
    ("if", TokenType::If),
    ("while", TokenType::While),
    ("do", TokenType::Do),
    ("then", TokenType::Then),
    ("print", TokenType::Print),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenType>> =
    LazyLock::new(|| KEYWORD_SPELLINGS.into_iter().collect());

/// Looks up a reserved word.
///
/// Keywords are spelled either all upper case or all lower case; mixed case
/// spellings are identifiers.
///
/// # Example
///
/// ```
/// use picoc_lex::{keyword_from_ident, TokenType};
///
/// assert_eq!(keyword_from_ident("WHILE"), Some(TokenType::While));
/// assert_eq!(keyword_from_ident("while"), Some(TokenType::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenType> {
    KEYWORDS.get(text).copied()
}
