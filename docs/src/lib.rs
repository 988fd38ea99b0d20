//! HTML documentation for the RDFC-1.0 test suite.
//!
//! Renders the manifest index page (`index.html`) from the generated
//! `manifest.jsonld`, and the vocabulary page (`vocab.html`) from compacted
//! vocabulary nodes. Pages are built from `{@name}` directive templates and
//! passed through [`beautify::beautify`] so regenerated HTML stays diff-stable.
//!
//! # Entry Points
//!
//! ```no_run
//! use std::path::Path;
//! use rdfc_docs::{render_manifest_html, Template};
//!
//! let html = render_manifest_html(Path::new("manifest.jsonld"), &Template::manifest_default())
//!     .expect("manifest.jsonld must exist");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod beautify;
pub mod linker;
pub mod manifest_page;
pub mod renderer;
pub mod vocab_page;
pub mod writer;

pub use manifest_page::{render_manifest, render_manifest_html};
pub use renderer::Template;
pub use vocab_page::render_vocab_html;
