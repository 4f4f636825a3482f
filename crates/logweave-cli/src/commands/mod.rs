//! Command implementations and dispatch logic.
//!
//! Each command is an async function that takes the shared CommandContext.

use camino::{Utf8Path, Utf8PathBuf};
use logweave_config::{
    CompositeConfiguration, ConfigurationFactory, DefaultPluginResolver, Locator, Source,
};
use logweave_core::error::{LogweaveError, LogweaveResult};
use std::sync::Arc;
use tracing::info;

pub mod check;
pub mod merge;
pub mod watch;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context rooted at the current directory
    pub fn new() -> LogweaveResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            LogweaveError::io("Failed to get current directory".to_string(), e)
        })?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
            LogweaveError::io(
                "Current directory is not valid UTF-8".to_string(),
                e.into_io_error(),
            )
        })?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
        })
    }

    /// Resolve a command-line path against the working directory
    pub fn resolve(&self, file: &Utf8Path) -> Locator {
        if file.is_absolute() {
            Locator::new(file)
        } else {
            Locator::new(self.cwd.join(file))
        }
    }

    /// Load every document in order; the first failure aborts
    pub fn load_sources(
        &self,
        files: &[Utf8PathBuf],
        factory: &dyn ConfigurationFactory,
    ) -> LogweaveResult<Vec<Source>> {
        files
            .iter()
            .map(|file| factory.load(&self.resolve(file)))
            .collect()
    }

    /// Load and merge documents with the standard plugin vocabulary
    pub fn compose(
        &self,
        files: &[Utf8PathBuf],
        factory: &dyn ConfigurationFactory,
    ) -> LogweaveResult<CompositeConfiguration> {
        let sources = self.load_sources(files, factory)?;
        CompositeConfiguration::build(sources, Arc::new(DefaultPluginResolver::new()))
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> LogweaveResult<()> {
    match command {
        Commands::Merge {
            files,
            format,
            output,
        } => {
            info!("Merging {} document(s)", files.len());
            merge::execute(files, format.into(), output, ctx).await
        },
        Commands::Check {
            files,
            json,
            strict,
        } => {
            info!("Checking {} document(s)", files.len());
            check::execute(files, json, strict, ctx).await
        },
        Commands::Watch {
            files,
            interval,
            format,
        } => {
            info!("Watching {} document(s) (interval: {:?})", files.len(), interval);
            watch::execute(files, interval, format.into(), ctx).await
        },
    }
}
