//! `rdfc-vocab`: Compiles the RDFC-1.0 test vocabulary.
//!
//! **Inputs:** `<dir>/vocab.ttl`, `<dir>/vocab_context.jsonld`
//!
//! **Outputs:**
//! - `<dir>/vocab.jsonld`: vocabulary compacted against the context
//! - `<dir>/vocab.html`: vocabulary documentation page
//!
//! **Usage:**
//! ```text
//! rdfc-vocab [--dir <path>] [--template <path>] [--quiet]
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

use rdfc_clients::vocab::main_with;

fn main() -> ExitCode {
    ExitCode::from(main_with(env::args_os(), &mut io::stderr().lock()))
}
