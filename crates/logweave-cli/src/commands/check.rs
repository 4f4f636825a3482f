//! `logweave check` command implementation.
//!
//! Prints the global settings and a per-group summary of the merged tree.

use camino::Utf8PathBuf;
use logweave_config::{CompositeConfiguration, DocumentFactory, Destination, Settings};
use logweave_core::error::{LogweaveError, LogweaveResult};

use super::CommandContext;

/// Execute the `logweave check` command
pub async fn execute(
    files: Vec<Utf8PathBuf>,
    json: bool,
    strict: bool,
    ctx: &CommandContext,
) -> LogweaveResult<()> {
    let composite = ctx.compose(&files, &DocumentFactory)?;
    if strict {
        Settings::validate(composite.root())?;
    }

    if json {
        let rendered = serde_json::to_string_pretty(composite.settings())
            .map_err(|e| LogweaveError::render("settings", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    for line in summary(&composite) {
        ctx.output.info(&line);
    }
    ctx.output.success("Configuration merged cleanly");
    Ok(())
}

/// Human-readable description of a merged configuration
pub fn summary(composite: &CompositeConfiguration) -> Vec<String> {
    let settings = composite.settings();
    let mut lines = vec![
        format!("name:             {}", composite.name().unwrap_or("<unnamed>")),
        format!("status:           {}", settings.status),
        format!("dest:             {}", describe(&settings.destination)),
        format!("verbose:          {}", settings.verbose),
        format!("packages:         {}", settings.packages.join(", ")),
        format!("shutdown hook:    {}", settings.shutdown_hook),
        format!("shutdown timeout: {}ms", settings.shutdown_timeout.as_millis()),
        format!("watch interval:   {}s", composite.watch_manager().interval_seconds()),
    ];

    for locator in composite.watch_manager().watched() {
        lines.push(format!("watching:         {}", locator));
    }
    for group in composite.root().children() {
        lines.push(format!(
            "{:<17} {} element(s)",
            format!("{}:", group.name()),
            group.children().len()
        ));
    }
    lines
}

fn describe(destination: &Destination) -> String {
    match destination {
        Destination::Stdout => "stdout".to_string(),
        Destination::Stderr => "stderr".to_string(),
        Destination::File(path) => path.to_string(),
    }
}
