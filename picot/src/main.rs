//! Picot CLI - A command-line driver for the Pico lexical analyzer.
//!
//! This is the main entry point for the picot CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{PicotError, Result};

/// Picot - A CLI driver for the Pico lexical analyzer
///
/// Picot scans Pico source text and prints the classified tokens, or
/// checks a source for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "picot")]
#[command(author = "Pico Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI driver for the Pico lexical analyzer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PICOT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PICOT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PICOT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the picot CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every token of a source
    ///
    /// Writes one token per line, ending with END_OF_FILE. Reads standard
    /// input when no file is given.
    Tokens(TokensCommand),

    /// Check a source for lexical errors
    ///
    /// Prints diagnostics and a summary; exits with an error status when
    /// any ERROR token was produced.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input file (default: standard input)
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Push back characters read by a failed base suffix or fraction
    #[arg(long)]
    restore: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input file (default: standard input)
    input: Option<PathBuf>,

    /// Push back characters read by a failed base suffix or fraction
    #[arg(long)]
    restore: bool,
}

/// Main entry point for the picot CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. Errors are printed to
/// stderr and turn into a failure exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only scanner output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PicotError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                verbose,
                input: args.input,
                format: args.format,
                restore: args.restore,
            },
            config,
        ),
        Commands::Check(args) => run_check(
            CheckArgs {
                verbose,
                input: args.input,
                restore: args.restore,
            },
            config,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["picot", "tokens"]);
        if let Commands::Tokens(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.format.is_none());
            assert!(!args.restore);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_input_and_format() {
        let cli = Cli::parse_from(["picot", "tokens", "prog.pico", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("prog.pico")));
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_rejects_unknown_format() {
        let result = Cli::try_parse_from(["picot", "tokens", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check_with_restore() {
        let cli = Cli::parse_from(["picot", "check", "--restore", "prog.pico"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.restore);
            assert_eq!(args.input, Some(PathBuf::from("prog.pico")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["picot", "--verbose", "check"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["picot", "tokens", "--config", "/path/to/picot.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/picot.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["picot", "--no-color", "tokens"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["picot"]).is_err());
    }
}
