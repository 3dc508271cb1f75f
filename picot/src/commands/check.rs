//! Check command implementation.
//!
//! Scans one input without printing tokens, reports every diagnostic the
//! scanner raised and fails when any `ERROR` token was produced.

use std::io::{self, Write};
use std::path::PathBuf;

use picoc_lex::{CharSource, LexicalAnalyzer, ScanConfig};
use picoc_util::Handler;
use tracing::info;

use crate::commands::common::{read_source, scan_config};
use crate::commands::{dispatch, Command};
use crate::config::Config;
use crate::error::{PicotError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file (standard input when absent).
    pub input: Option<PathBuf>,
    /// Push back characters read by failed numeric lookahead.
    pub restore: bool,
}

/// Counts gathered while scanning one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens before `END_OF_FILE`.
    pub tokens: usize,
    /// `ERROR` tokens.
    pub errors: usize,
    /// Warning diagnostics.
    pub warnings: usize,
    /// Line of the final `END_OF_FILE`.
    pub lines: u32,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    fn scan_config(&self) -> ScanConfig {
        scan_config(self.config.scan, self.args.restore)
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let (name, source) = read_source(self.args.input.as_deref())?;
        let handler = Handler::new();
        let mut lexer =
            LexicalAnalyzer::from_source(source, &handler).with_config(self.scan_config());

        let summary = summarize(&mut lexer, &handler);

        let stderr = io::stderr();
        let mut err = stderr.lock();
        for diagnostic in handler.diagnostics() {
            writeln!(err, "{}", diagnostic)?;
        }

        println!(
            "{}: {} token(s), {} line(s), {} error(s), {} warning(s)",
            name, summary.tokens, summary.lines, summary.errors, summary.warnings
        );

        if self.args.verbose {
            info!(input = %name, ?summary, "check complete");
        }

        if summary.errors > 0 {
            return Err(PicotError::ScanFailed {
                input: name,
                errors: summary.errors,
            });
        }
        Ok(())
    }
}

/// Drains `lexer` and tallies what it produced.
pub fn summarize<S: CharSource>(lexer: &mut LexicalAnalyzer<'_, S>, handler: &Handler) -> ScanSummary {
    let mut summary = ScanSummary::default();
    loop {
        let token = lexer.get_token();
        if token.is_eof() {
            summary.lines = token.line_no;
            break;
        }
        summary.tokens += 1;
        if token.is_error() {
            summary.errors += 1;
        }
    }
    summary.warnings = handler.warning_count();
    summary
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    dispatch::<CheckCommand>(args, config)
}
