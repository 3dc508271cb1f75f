//! Whitespace skipping.
//!
//! Newlines are only ever counted here and in `drop_char`, so a token's line
//! is fixed the moment whitespace before it has been consumed.

use crate::chars::is_space;
use crate::source::CharSource;
use crate::LexicalAnalyzer;

impl<S: CharSource> LexicalAnalyzer<'_, S> {
    /// Consumes whitespace up to the next token, counting newlines.
    ///
    /// The first non-whitespace character is returned to the source.
    ///
    /// # Returns
    ///
    /// `true` if any whitespace was consumed.
    pub fn skip_space(&mut self) -> bool {
        let mut space_encountered = false;

        while let Some(c) = self.source.next_char() {
            if !is_space(c) {
                self.source.unget_char(c);
                break;
            }
            space_encountered = true;
            if c == '\n' {
                self.line_no += 1;
            }
        }

        space_encountered
    }
}
