//! Serializers for the test manifest.
//!
//! Two text formats are produced directly from the test list:
//! - **JSON-LD** ([`jsonld`]), written to `manifest.jsonld`
//! - **Turtle** ([`turtle`]), written to `manifest.ttl`
//!
//! The HTML index is rendered from the written JSON-LD file by `rdfc-docs`.

pub mod jsonld;
pub mod turtle;

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// An output format selectable with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `manifest.jsonld`
    JsonLd,
    /// `manifest.ttl`
    Turtle,
    /// `index.html`
    Html,
}

impl Format {
    /// All formats in the order a default run writes them.
    pub const ALL: [Format; 3] = [Format::JsonLd, Format::Turtle, Format::Html];

    /// The `--format` spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::JsonLd => "jsonld",
            Format::Turtle => "ttl",
            Format::Html => "html",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormatError(s.to_owned()))
    }
}
