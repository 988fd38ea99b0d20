//! RDF Dataset Canonicalization (RDFC-1.0) test manifest.
//!
//! The `rdfc-manifest` crate reads the tabular test manifest
//! (`manifest.csv`) into typed [`Test`] records and projects them into the
//! published manifest formats: JSON-LD and Turtle. The HTML index is
//! rendered from the JSON-LD output by the `rdfc-docs` crate.
//!
//! # Entry Point
//!
//! ```
//! let csv = "test,name,comment,complexity,approval,hashAlgorithm,rdfc10,rdfc10map\n\
//!            test001,Simple,,0,,,TRUE,FALSE\n";
//! let tests = rdfc_manifest::loader::parse_tests(csv.as_bytes()).unwrap();
//! assert_eq!(tests.len(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! # let tests = Vec::new();
//! let config = rdfc_manifest::ManifestConfig::default();
//! let json_ld = rdfc_manifest::serializer::jsonld::to_json_ld_string(&tests, &config).unwrap();
//! let turtle = rdfc_manifest::serializer::turtle::to_turtle(&tests, &config);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod loader;
pub mod model;
pub mod serializer;

pub use config::{ManifestConfig, ManifestPaths};
pub use error::{FormatError, LoadError};
pub use model::{entries, Complexity, Entry, Test, Variant, VariantKind};
pub use serializer::Format;
