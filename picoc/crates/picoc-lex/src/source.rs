//! Character sources for the scanner.
//!
//! This module provides the [`CharSource`] trait the scanner reads from and
//! [`InputBuffer`], an in-memory implementation with an unbounded pushback
//! stack. Character pushback lives here; token pushback lives in the
//! scanner, and the two buffers never share state.

use std::io::Read;

use picoc_util::SourceResult;

/// A stream of characters that supports returning characters to it.
///
/// Pushed-back characters are replayed in LIFO order before any fresh input.
pub trait CharSource {
    /// Returns the next character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;

    /// Returns a character to the stream so the next read yields it again.
    fn unget_char(&mut self, c: char);
}

impl<T: CharSource + ?Sized> CharSource for &mut T {
    fn next_char(&mut self) -> Option<char> {
        (**self).next_char()
    }

    fn unget_char(&mut self, c: char) {
        (**self).unget_char(c)
    }
}

/// An owned, fully buffered character source.
///
/// # Example
///
/// ```
/// use picoc_lex::source::{CharSource, InputBuffer};
///
/// let mut input = InputBuffer::new("ab");
/// assert_eq!(input.next_char(), Some('a'));
/// input.unget_char('a');
/// assert_eq!(input.next_char(), Some('a'));
/// assert_eq!(input.next_char(), Some('b'));
/// assert_eq!(input.next_char(), None);
/// assert!(input.is_at_end());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    /// The source text being traversed.
    source: String,

    /// Byte offset of the next unread character in `source`.
    position: usize,

    /// Characters returned with `unget_char`, most recent last.
    pushback: Vec<char>,
}

impl InputBuffer {
    /// Creates a source over the given text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: 0,
            pushback: Vec::new(),
        }
    }

    /// Drains a reader into a new source.
    ///
    /// # Errors
    ///
    /// Fails if reading fails or the bytes are not valid UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> SourceResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::new(text))
    }

    /// Returns true when no pushed-back characters remain and the text is
    /// exhausted.
    pub fn is_at_end(&self) -> bool {
        self.pushback.is_empty() && self.position >= self.source.len()
    }
}

impl From<&str> for InputBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for InputBuffer {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl CharSource for InputBuffer {
    fn next_char(&mut self) -> Option<char> {
        if let Some(c) = self.pushback.pop() {
            return Some(c);
        }

        let c = self.source[self.position..].chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn unget_char(&mut self, c: char) {
        self.pushback.push(c);
    }
}
