//! Compiler for the RDFC-1.0 test vocabulary.
//!
//! Reads `vocab.ttl`, normalizes comment whitespace, serializes the graph as
//! JSON-LD compacted against `vocab_context.jsonld`, and renders
//! `vocab.jsonld` and `vocab.html`.
//!
//! # Entry Points
//!
//! ```no_run
//! use std::path::Path;
//! use rdfc_docs::Template;
//! use rdfc_vocab::{compile_files, VocabPaths};
//!
//! let paths = VocabPaths::in_dir(Path::new("."));
//! compile_files(&paths, &Template::vocab_default()).expect("vocabulary compiles");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod graph;
pub mod iris;
pub mod jsonld;
pub mod partition;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use log::debug;

use rdfc_docs::writer::write_text;
use rdfc_docs::{render_vocab_html, Template};

pub use graph::{load_graph, normalize_comments, parse_graph, Graph};
pub use iris::VOCAB_IRI;
pub use jsonld::{to_compacted, to_expanded};
pub use partition::{partition, PartitionError, VocabIndex};

/// Vocabulary source file name.
pub const VOCAB_TTL: &str = "vocab.ttl";
/// JSON-LD context file name.
pub const VOCAB_CONTEXT: &str = "vocab_context.jsonld";
/// Compacted JSON-LD output file name.
pub const VOCAB_JSONLD: &str = "vocab.jsonld";
/// HTML output file name.
pub const VOCAB_HTML: &str = "vocab.html";

/// Input and output locations of the vocabulary compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabPaths {
    /// Turtle source.
    pub ttl: PathBuf,
    /// Context document used for compaction.
    pub context: PathBuf,
    /// Compacted JSON-LD output.
    pub jsonld: PathBuf,
    /// HTML output.
    pub html: PathBuf,
}

impl VocabPaths {
    /// Conventional file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            ttl: dir.join(VOCAB_TTL),
            context: dir.join(VOCAB_CONTEXT),
            jsonld: dir.join(VOCAB_JSONLD),
            html: dir.join(VOCAB_HTML),
        }
    }
}

/// Generated vocabulary documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabOutput {
    /// Pretty-printed compacted JSON-LD.
    pub jsonld: String,
    /// Beautified HTML page.
    pub html: String,
}

/// Compiles Turtle source against a context document, without touching the filesystem.
///
/// # Errors
///
/// Returns an error if the Turtle or the context document is malformed.
pub fn compile(turtle: &str, context_document: &str, template: &Template) -> Result<VocabOutput> {
    compile_graph(parse_graph(turtle)?, context_document, template)
}

/// Compiles an already parsed graph against a context document.
///
/// # Errors
///
/// Returns an error if the context document is malformed or compaction fails.
pub fn compile_graph(
    mut graph: Graph,
    context_document: &str,
    template: &Template,
) -> Result<VocabOutput> {
    let rewritten = normalize_comments(&mut graph);
    let compacted = to_compacted(&graph, context_document)?;
    let index = partition(&compacted)?;
    debug!(
        "{} triples ({} comments normalized), {} classes, {} properties",
        graph.len(),
        rewritten,
        index.classes.len(),
        index.properties.len()
    );

    let html = render_vocab_html(index.ontology, &index.classes, &index.properties, template);
    let jsonld = serde_json::to_string_pretty(&compacted)?;
    Ok(VocabOutput { jsonld, html })
}

/// Reads the inputs named by `paths`, compiles them, and writes both outputs.
///
/// # Errors
///
/// Returns an error if an input cannot be read, compilation fails, or an
/// output cannot be written.
pub fn compile_files(paths: &VocabPaths, template: &Template) -> Result<VocabOutput> {
    let graph = load_graph(&paths.ttl)?;
    let context = fs::read_to_string(&paths.context)
        .with_context(|| format!("Failed to read {}", paths.context.display()))?;
    let output = compile_graph(graph, &context, template)
        .with_context(|| format!("Cannot compile {}", paths.ttl.display()))?;
    write_text(&paths.jsonld, &output.jsonld)?;
    write_text(&paths.html, &output.html)?;
    Ok(output)
}
