//! Character classes used by the scanner.
//!
//! Pico source is classified with the C locale's rules: only ASCII letters
//! and digits take part in identifiers and numbers, and whitespace is the six
//! ASCII spacing characters (including vertical tab, which
//! [`char::is_ascii_whitespace`] leaves out).

/// Checks if a character separates tokens.
///
/// # Example
///
/// ```
/// use picoc_lex::chars::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\n'));
/// assert!(is_space('\x0B'));
/// assert!(!is_space('x'));
/// ```
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use picoc_lex::chars::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(!is_alpha('_'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_alnum(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Checks if a character is an octal digit (`0`-`7`).
#[inline]
pub fn is_octal_digit(c: char) -> bool {
    c.is_digit(8)
}

/// Checks if a character is a hexadecimal digit (`0`-`9`, `a`-`f`, `A`-`F`).
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
