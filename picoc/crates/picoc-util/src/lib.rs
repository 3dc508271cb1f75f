//! picoc-util - Shared Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate holds the pieces every other picoc crate leans on:
//!
//! - [`diagnostic`]: severity levels, diagnostic records, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`].
//! - [`error`]: `thiserror` error enums for failures that are not lexical
//!   (reading input, decoding it).
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. RESUMABLE REPORTING
//!    Lexical problems are recorded in a [`Handler`] and scanning carries on.
//!    Only failures that make scanning impossible (I/O, decoding) are `Err`.
//!
//! 2. LINE-ORIENTED LOCATIONS
//!    The scanner tracks lines, not byte spans, so every diagnostic carries a
//!    1-based line number.

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceError, SourceResult};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
