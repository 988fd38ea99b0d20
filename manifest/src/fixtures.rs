//! Creates placeholder fixture files referenced by the manifest.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::model::{Test, Variant};

/// Returns every fixture path a test references: its action and each present result.
#[must_use]
pub fn referenced_files(test: &Test) -> Vec<String> {
    std::iter::once(test.action.clone())
        .chain(Variant::ALL.iter().filter_map(|v| test.result(*v)))
        .collect()
}

/// Placeholder content for a missing fixture.
fn placeholder(path: &str) -> &'static str {
    if path.ends_with(".json") {
        "{}"
    } else {
        ""
    }
}

/// Creates every missing fixture under `root`, leaving existing files untouched.
///
/// Parent directories are not created. Returns the paths that were created,
/// so a second run returns an empty list.
///
/// # Errors
///
/// Returns an error if a file cannot be created, including when its parent
/// directory does not exist.
pub fn touch_fixtures(tests: &[Test], root: &Path) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for test in tests {
        for file in referenced_files(test) {
            let path = root.join(&file);
            if path.exists() {
                continue;
            }
            fs::write(&path, placeholder(&file))
                .with_context(|| format!("Failed to create fixture {}", path.display()))?;
            info!("Created: {}", path.display());
            created.push(path);
        }
    }
    Ok(created)
}
