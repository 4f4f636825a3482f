//! # logweave-cli
//!
//! Compose logging configuration documents from the command line.
//!
//! This is the entry point for the `logweave` tool. It parses commands, sets
//! up logging and error reporting, and dispatches to the command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use logweave_config::DocumentFormat;
use logweave_core::error::{LogweaveError, LogweaveResult};
use std::process::ExitCode;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Compose logging configuration from several documents
#[derive(Parser)]
#[command(name = "logweave", version, about = "Merge layered logging configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit diagnostics as JSON lines
    #[arg(long, global = true, env = "LOGWEAVE_LOG_JSON")]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge documents in order and print the result
    Merge {
        /// Configuration documents, base first
        #[arg(required = true, value_name = "FILE")]
        files: Vec<Utf8PathBuf>,
        /// Output syntax
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write the merged document here instead of stdout
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
    /// Show the settings the merged documents resolve to
    Check {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<Utf8PathBuf>,
        /// Print settings as JSON
        #[arg(long)]
        json: bool,
        /// Fail on root attributes that would fall back to defaults
        #[arg(long)]
        strict: bool,
    },
    /// Merge, then re-merge whenever a watched document changes
    Watch {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<Utf8PathBuf>,
        /// Watch every document with this interval in seconds
        #[arg(long, env = "LOGWEAVE_WATCH_INTERVAL")]
        interval: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// Syntax of rendered documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Toml => DocumentFormat::Toml,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.log_json);
    setup_panic_handler();

    info!("Starting logweave v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new().format_error(&e));
            ExitCode::from(exit_status(&e))
        },
    }
}

/// Source-level failures exit with 1; a composite that cannot exist at all exits with 2
fn exit_status(error: &LogweaveError) -> u8 {
    if error.is_recoverable() {
        1
    } else {
        2
    }
}

fn run_cli(cli: Cli) -> LogweaveResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| LogweaveError::io("Failed to create async runtime".to_string(), e))?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool, json: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = format!(
        "logweave_cli={},logweave_config={},logweave_core={}",
        level, level, level
    );

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("logweave encountered an unexpected error: {}", panic_info);
        eprintln!("logweave crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/logweave/logweave/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
