//! Writes generated documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Writes `content` to `path`, creating parent directories as needed.
///
/// A trailing newline is appended when `content` lacks one.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let mut text = content.to_owned();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!("Written: {}", path.display());
    Ok(())
}
