//! Shared plumbing for the `rdfc-manifest` and `rdfc-vocab` binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod manifest;
pub mod vocab;

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{error, LevelFilter};
use rdfc_docs::Template;

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of a failed run, a usage error, or `--help`.
pub const EXIT_FAILURE: u8 = 1;

/// Installs the stderr logger: `info` by default, `warn` when `quiet`.
///
/// `RUST_LOG` overrides both. Only the first call in a process installs it.
pub fn init_logger(quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .try_init();
}

/// Parses `argv` (program name first) into `A`.
///
/// clap diagnostics, and the help text when `help` reports it was asked
/// for, go to `stderr`; both yield `None`, which callers turn into
/// [`EXIT_FAILURE`].
pub fn parse_args<A, I, T, E>(argv: I, help: fn(&A) -> bool, stderr: &mut E) -> Option<A>
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    E: Write,
{
    match A::try_parse_from(argv) {
        Err(err) => {
            let _ = write!(stderr, "{}", err.render());
            None
        }
        Ok(args) if help(&args) => {
            let _ = writeln!(stderr, "{}", A::command().render_help());
            None
        }
        Ok(args) => Some(args),
    }
}

/// Maps the outcome of a run to an exit status, logging the error chain.
pub fn finish(result: Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            error!("{err:#}");
            EXIT_FAILURE
        }
    }
}

/// Loads the template at `path`, or falls back to `default`.
///
/// # Errors
///
/// Returns an error if `path` is given but cannot be read.
pub fn load_template(path: Option<&Path>, default: fn() -> Template) -> Result<Template> {
    match path {
        Some(path) => Template::from_file(path),
        None => Ok(default()),
    }
}
