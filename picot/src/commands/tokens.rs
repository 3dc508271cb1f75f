//! Tokens command implementation.
//!
//! Scans one input and prints every token, including the final
//! `END_OF_FILE`, in text or JSON form.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use picoc_lex::{CharSource, LexicalAnalyzer, ScanConfig};
use picoc_util::Handler;
use tracing::{debug, info};

use crate::commands::common::{read_source, scan_config, OutputFormat};
use crate::commands::{dispatch, Command};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file (standard input when absent).
    pub input: Option<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Push back characters read by failed numeric lookahead.
    pub restore: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Output format after applying command-line overrides.
    fn output_format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    /// Scanner options after applying command-line overrides.
    fn scan_config(&self) -> ScanConfig {
        scan_config(self.config.scan, self.args.restore)
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let (name, source) = read_source(self.args.input.as_deref())?;
        let handler = Handler::new();
        let mut lexer =
            LexicalAnalyzer::from_source(source, &handler).with_config(self.scan_config());

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let count = write_tokens(&mut out, &mut lexer, self.output_format())?;
        out.flush()?;

        if self.args.verbose {
            info!(input = %name, tokens = count, "scan complete");
        }
        for diagnostic in handler.diagnostics() {
            debug!(input = %name, "{}", diagnostic);
        }
        Ok(())
    }
}

/// Writes every token from `lexer` up to and including `END_OF_FILE`.
///
/// # Returns
/// * `Result<usize>` - Number of tokens written
pub fn write_tokens<W, S>(
    out: &mut W,
    lexer: &mut LexicalAnalyzer<'_, S>,
    format: OutputFormat,
) -> Result<usize>
where
    W: Write,
    S: CharSource,
{
    let mut count = 0;
    loop {
        let token = lexer.get_token();
        format.write_token(out, &token)?;
        count += 1;
        if token.is_eof() {
            return Ok(count);
        }
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<()> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    dispatch::<TokensCommand>(args, config)
}
