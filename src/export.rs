// WHY: Reports are written as plain text next to the manuscript they describe
// Naming is `<stem>_<kind>.txt` so repeated runs overwrite rather than accumulate

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Report kind used for full reports produced by the batch runner
pub const FULL_REPORT_KIND: &str = "plush_report";

/// Path of the report of `kind` for a source manuscript
pub fn report_path(source_path: &Path, kind: &str) -> PathBuf {
    let mut report = source_path.to_path_buf();
    let file_stem = report
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("manuscript");
    report.set_file_name(format!("{file_stem}_{kind}.txt"));
    report
}

/// Write report text, ensuring it ends with a newline
pub async fn write_report<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let content: Cow<'_, str> = if content.ends_with('\n') {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(format!("{content}\n"))
    };
    tokio::fs::write(path, content.as_bytes())
        .await
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Write the `kind` report for a source manuscript and return where it went
pub async fn export_report<P: AsRef<Path>>(source_path: P, kind: &str, content: &str) -> Result<PathBuf> {
    let path = report_path(source_path.as_ref(), kind);
    write_report(&path, content).await?;
    Ok(path)
}
