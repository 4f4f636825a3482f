//! `logweave merge` command implementation.

use camino::Utf8PathBuf;
use logweave_config::{DocumentFactory, DocumentFormat};
use logweave_core::error::{LogweaveError, LogweaveResult};

use super::CommandContext;

/// Execute the `logweave merge` command
pub async fn execute(
    files: Vec<Utf8PathBuf>,
    format: DocumentFormat,
    output: Option<Utf8PathBuf>,
    ctx: &CommandContext,
) -> LogweaveResult<()> {
    let composite = ctx.compose(&files, &DocumentFactory)?;
    let rendered = format.render(composite.root())?;

    match output {
        Some(path) => {
            let path = ctx.resolve(&path).path().to_path_buf();
            tokio::fs::write(&path, rendered).await.map_err(|e| {
                LogweaveError::io(format!("Failed to write merged configuration: {}", path), e)
            })?;
            ctx.output
                .success(&format!("Merged {} document(s) into {}", files.len(), path));
        },
        None => println!("{}", rendered),
    }

    Ok(())
}
