//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use picoc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
///
/// let diag = DiagnosticBuilder::new(Level::Error, "expected a digit after '.'")
///     .code(DiagnosticCode::E_LEXER_MALFORMED_REAL)
///     .line(7)
///     .help("write `3.0` instead of `3.`")
///     .build();
///
/// assert_eq!(diag.line, 7);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a builder does nothing until `build` or `emit` is called"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    line: u32,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: 0,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the 1-based source line
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(self.level, self.message, self.line);
        diagnostic.code = self.code;
        diagnostic.notes = self.notes;
        diagnostic.helps = self.helps;
        diagnostic
    }

    /// Build and emit the diagnostic into a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
