//! `rdfc-manifest`: Generates the RDFC-1.0 test manifest from `manifest.csv`.
//!
//! **Outputs** (default run, in this order):
//! - `<dir>/manifest.jsonld`: JSON-LD manifest
//! - `<dir>/manifest.ttl`: Turtle manifest
//! - `<dir>/index.html`: HTML index, rendered from `manifest.jsonld`
//!
//! **Usage:**
//! ```text
//! rdfc-manifest [--dir <path>] [-f <jsonld|ttl|html>] [-o <path>] [--touch] [--quiet]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::env;
use std::io;
use std::process::ExitCode;

use rdfc_clients::manifest::main_with;

fn main() -> ExitCode {
    ExitCode::from(main_with(env::args_os(), &mut io::stdout().lock(), &mut io::stderr().lock()))
}
