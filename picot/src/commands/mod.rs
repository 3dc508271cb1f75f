//! Command modules for the picot CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file and driven through the
//! [`Command`] trait.

pub mod common;

pub mod check;
pub mod tokens;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};

/// Standard command trait that all picot commands implement.
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<()>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Builds and executes a command, logging its lifecycle.
pub(crate) fn dispatch<C: Command>(args: C::Args, config: Config) -> Result<()> {
    debug!(command = C::name(), "executing");
    let result = C::new(args, config).execute();
    debug!(command = C::name(), ok = result.is_ok(), "finished");
    result
}
