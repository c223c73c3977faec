//! File helpers.
//!
//! Thin wrappers over `std::fs` whose errors name the path involved, so a
//! missing skeleton or theme is reported as such.

use std::{fs, path::Path};

use anyhow::Context;

/// Reads a whole file, failing with the path in the error.
pub fn read_to_string(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("can not open {}", path.display()))
}

/// Writes `content` to `path`, replacing any previous file.
pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Copies `from` to `to`, replacing any previous file.
pub fn copy_file(from: &Path, to: &Path) -> anyhow::Result<()> {
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    debug!("copied {} -> {}", from.display(), to.display());
    Ok(())
}

/// Fails unless `path` is an existing file.
pub fn ensure_file(path: &Path, what: &str) -> anyhow::Result<()> {
    if !path.is_file() {
        bail!("{what} not found: {}", path.display());
    }
    Ok(())
}
