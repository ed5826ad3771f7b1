use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::warn;

pub fn open_url(target: &str) -> Result<()> {
    // Try using the system default
    if open::that(target).is_ok() {
        return Ok(());
    }
    // Fallback: try firefox directly
    warn!(target, "default opener failed, trying firefox");
    Command::new("firefox")
        .arg(target)
        .spawn()
        .with_context(|| format!("failed to open {}", target))?;
    Ok(())
}

/// Open a rendered page from disk in the browser.
pub fn open_page(path: &Path) -> Result<()> {
    let target = path
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    open_url(&target.to_string_lossy())
}
