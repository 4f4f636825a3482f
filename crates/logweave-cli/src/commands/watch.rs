//! `logweave watch` command implementation.
//!
//! Polls the composite's watch manager on its interval and re-merges every
//! document when any of them changes.

use std::time::Duration;

use camino::Utf8PathBuf;
use logweave_config::{
    CompositeConfiguration, ConfigResult, ConfigurationFactory, DocumentFactory, DocumentFormat,
    Locator, Source,
};
use logweave_core::error::LogweaveResult;

use super::CommandContext;

/// Factory that forces one watch interval onto every loaded document
pub struct IntervalOverride<F> {
    pub inner: F,
    pub seconds: Option<u32>,
}

impl<F: ConfigurationFactory> ConfigurationFactory for IntervalOverride<F> {
    fn load(&self, locator: &Locator) -> ConfigResult<Source> {
        let source = self.inner.load(locator)?;
        Ok(match self.seconds {
            Some(seconds) => source.with_watch_interval(seconds),
            None => source,
        })
    }
}

/// Execute the `logweave watch` command
pub async fn execute(
    files: Vec<Utf8PathBuf>,
    interval: Option<u32>,
    format: DocumentFormat,
    ctx: &CommandContext,
) -> LogweaveResult<()> {
    let factory = IntervalOverride {
        inner: DocumentFactory,
        seconds: interval,
    };
    let mut composite = ctx.compose(&files, &factory)?;
    print_merged(&composite, format)?;

    let mut seconds = composite.watch_manager().interval_seconds();
    if seconds == 0 {
        ctx.output
            .warn("No document sets monitorInterval; pass --interval to watch");
        return Ok(());
    }

    ctx.output.info(&format!(
        "Watching {} document(s) every {}s, press Ctrl-C to stop",
        composite.watch_manager().watched().count(),
        seconds
    ));

    let mut ticker = tokio::time::interval(Duration::from_secs(u64::from(seconds)));
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                ctx.output.info("Stopped watching");
                return Ok(());
            }
            _ = ticker.tick() => {
                composite.watch_manager_mut().check_files();
                if !composite.reconfigure_requested() {
                    continue;
                }

                composite = composite.reconfigure(&factory)?;
                ctx.output.success("Configuration reloaded");
                print_merged(&composite, format)?;

                let next = composite.watch_manager().interval_seconds();
                if next == 0 {
                    ctx.output.warn("Watching disabled by the reloaded configuration");
                    return Ok(());
                }
                if next != seconds {
                    tracing::info!(from = seconds, to = next, "watch interval changed");
                    seconds = next;
                    ticker = tokio::time::interval(Duration::from_secs(u64::from(seconds)));
                    ticker.tick().await;
                }
            }
        }
    }
}

fn print_merged(composite: &CompositeConfiguration, format: DocumentFormat) -> LogweaveResult<()> {
    println!("{}", format.render(composite.root())?);
    Ok(())
}
