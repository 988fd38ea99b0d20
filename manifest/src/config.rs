//! Manifest generation settings and the fixed file layout.

use std::path::{Path, PathBuf};

/// Input manifest file name.
pub const MANIFEST_CSV: &str = "manifest.csv";
/// Generated JSON-LD manifest file name.
pub const MANIFEST_JSONLD: &str = "manifest.jsonld";
/// Generated Turtle manifest file name.
pub const MANIFEST_TTL: &str = "manifest.ttl";
/// Generated HTML index file name.
pub const INDEX_HTML: &str = "index.html";

/// Immutable settings passed to every serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Manifest title (`rdfs:label`).
    pub title: String,
    /// Manifest description (`rdfs:comment`).
    pub description: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            title: "RDF Dataset Canonicalization (RDFC-1.0) Test Suite".to_owned(),
            description: "Tests the 1.0 version of RDF Dataset Canonicalization and the \
                          generation of canonical maps."
                .to_owned(),
        }
    }
}

/// Locations of the manifest input and outputs inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    /// Directory holding the manifest; fixture paths resolve against it.
    pub root: PathBuf,
    /// `manifest.csv`
    pub csv: PathBuf,
    /// `manifest.jsonld`
    pub jsonld: PathBuf,
    /// `manifest.ttl`
    pub ttl: PathBuf,
    /// `index.html`
    pub html: PathBuf,
}

impl ManifestPaths {
    /// Resolves the fixed file names against `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            root: dir.to_path_buf(),
            csv: dir.join(MANIFEST_CSV),
            jsonld: dir.join(MANIFEST_JSONLD),
            ttl: dir.join(MANIFEST_TTL),
            html: dir.join(INDEX_HTML),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_against_dir() {
        let paths = ManifestPaths::in_dir(Path::new("suite"));
        assert_eq!(paths.csv, Path::new("suite/manifest.csv"));
        assert_eq!(paths.jsonld, Path::new("suite/manifest.jsonld"));
        assert_eq!(paths.ttl, Path::new("suite/manifest.ttl"));
        assert_eq!(paths.html, Path::new("suite/index.html"));
    }
}
