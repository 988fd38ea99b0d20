//! Renders HTML templates by expanding `{@name}` directives.
//!
//! A template is plain HTML with directives such as `{@title}` or
//! `{@entries}`. Each directive is replaced by the value bound to its name;
//! directives with no binding are left in place verbatim.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// An HTML page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wraps template source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Reads a template from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        Ok(Self::new(source))
    }

    /// The built-in manifest index template.
    #[must_use]
    pub fn manifest_default() -> Self {
        Self::new(include_str!("../templates/manifest.html"))
    }

    /// The built-in vocabulary documentation template.
    #[must_use]
    pub fn vocab_default() -> Self {
        Self::new(include_str!("../templates/vocab.html"))
    }

    /// Expands every directive using `bindings`.
    #[must_use]
    pub fn render(&self, bindings: &[(&str, &str)]) -> String {
        expand_directives(&self.source, bindings)
    }
}

/// Replaces each `{@name}` in `source` with its bound value.
pub fn expand_directives(source: &str, bindings: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(source.len());
    let mut remaining = source;

    while let Some(start) = remaining.find("{@") {
        result.push_str(&remaining[..start]);
        remaining = &remaining[start..];

        let end = match remaining.find('}') {
            Some(e) => e,
            None => {
                result.push_str(remaining);
                return result;
            }
        };

        let name = remaining[2..end].trim();
        match bindings.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&remaining[..=end]),
        }
        remaining = &remaining[end + 1..];
    }

    result.push_str(remaining);
    result
}

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
