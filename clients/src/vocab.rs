//! The vocabulary compiler behind `rdfc-vocab`.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::info;

use rdfc_docs::Template;
use rdfc_vocab::{compile_files, VocabPaths};

use crate::{finish, init_logger, load_template, parse_args, EXIT_FAILURE};

/// Command line of `rdfc-vocab`.
#[derive(Debug, Parser)]
#[command(
    name = "rdfc-vocab",
    about = "Compile vocab.ttl into compacted JSON-LD and HTML documentation",
    disable_help_flag = true
)]
pub struct VocabArgs {
    /// Directory holding vocab.ttl and vocab_context.jsonld.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// HTML template to use instead of the built-in one.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Suppress most output other than warnings and errors.
    #[arg(long)]
    pub quiet: bool,

    /// This message.
    #[arg(short = '?', long, action = ArgAction::SetTrue)]
    pub help: bool,
}

fn execute(args: &VocabArgs) -> Result<()> {
    let template = load_template(args.template.as_deref(), Template::vocab_default)?;
    let paths = VocabPaths::in_dir(&args.dir);
    let output = compile_files(&paths, &template)?;
    info!(
        "Vocabulary compiled ({} bytes JSON-LD, {} bytes HTML)",
        output.jsonld.len(),
        output.html.len()
    );
    Ok(())
}

/// Runs `rdfc-vocab` on `argv` (program name first) and returns its exit
/// status.
pub fn main_with<I, T, E>(argv: I, stderr: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    E: Write,
{
    let Some(args) = parse_args::<VocabArgs, _, _, _>(argv, |a| a.help, stderr) else {
        return EXIT_FAILURE;
    };
    init_logger(args.quiet);
    finish(execute(&args))
}
