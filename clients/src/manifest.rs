//! The manifest generation pipeline behind `rdfc-manifest`.
//!
//! CSV → tests → one serializer to stdout or a file, or, by default, all
//! three documents into the manifest directory. The HTML index is rendered
//! from `manifest.jsonld`, so the default run writes JSON-LD first.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, warn};

use rdfc_docs::writer::write_text;
use rdfc_docs::{render_manifest_html, Template};
use rdfc_manifest::fixtures::touch_fixtures;
use rdfc_manifest::loader::load_tests;
use rdfc_manifest::serializer::jsonld::to_json_ld_string;
use rdfc_manifest::serializer::turtle::to_turtle;
use rdfc_manifest::{entries, Format, ManifestConfig, ManifestPaths, Test};

use crate::{finish, init_logger, load_template, parse_args, EXIT_FAILURE};

/// Command line of `rdfc-manifest`.
#[derive(Debug, Parser)]
#[command(
    name = "rdfc-manifest",
    about = "Generate the RDFC-1.0 test manifest as JSON-LD, Turtle and HTML",
    disable_help_flag = true
)]
pub struct ManifestArgs {
    /// Output format (jsonld, ttl or html); all three files are written when absent.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output to the specified file path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress most output other than warnings and errors.
    #[arg(long)]
    pub quiet: bool,

    /// Create referenced fixture files if missing.
    #[arg(long)]
    pub touch: bool,

    /// Directory holding manifest.csv and receiving the default outputs.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// HTML template to use instead of the built-in one.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// This message.
    #[arg(short = '?', long, action = ArgAction::SetTrue)]
    pub help: bool,
}

/// What one `rdfc-manifest` invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Directory holding `manifest.csv`.
    pub dir: PathBuf,
    /// Single format to emit; `None` writes every format.
    pub format: Option<Format>,
    /// Destination for a single format; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Create missing fixture files before serializing.
    pub touch: bool,
}

impl ManifestOptions {
    /// A default run over `dir`.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            format: None,
            output: None,
            touch: false,
        }
    }
}

/// Where a default run writes `format`.
#[must_use]
pub fn default_output(paths: &ManifestPaths, format: Format) -> &Path {
    match format {
        Format::JsonLd => &paths.jsonld,
        Format::Turtle => &paths.ttl,
        Format::Html => &paths.html,
    }
}

/// Serializes `tests` in `format`.
///
/// HTML is rendered from the JSON-LD file at `paths.jsonld`, which must
/// already exist.
///
/// # Errors
///
/// Returns an error if serialization fails or, for HTML, the JSON-LD file is
/// missing or malformed.
pub fn render(
    format: Format,
    tests: &[Test],
    paths: &ManifestPaths,
    config: &ManifestConfig,
    template: &Template,
) -> Result<String> {
    match format {
        Format::JsonLd => to_json_ld_string(tests, config).context("Failed to serialize JSON-LD"),
        Format::Turtle => Ok(to_turtle(tests, config)),
        Format::Html => render_manifest_html(&paths.jsonld, template),
    }
}

/// Runs the pipeline, writing single-format output without `--output` to `stdout`.
///
/// # Errors
///
/// Returns an error if the CSV cannot be loaded, a fixture cannot be
/// created, or an output cannot be rendered or written.
pub fn run<W: Write>(
    options: &ManifestOptions,
    config: &ManifestConfig,
    template: &Template,
    stdout: &mut W,
) -> Result<()> {
    let paths = ManifestPaths::in_dir(&options.dir);
    let tests = load_tests(&paths.csv)
        .with_context(|| format!("Cannot load {}", paths.csv.display()))?;
    info!(
        "Loaded {} tests ({} entries) from {}",
        tests.len(),
        entries(&tests).len(),
        paths.csv.display()
    );

    if options.touch {
        let created = touch_fixtures(&tests, &paths.root)?;
        info!("Created {} fixture files", created.len());
    }

    let Some(format) = options.format else {
        if options.output.is_some() {
            warn!("--output is ignored without --format");
        }
        for format in Format::ALL {
            let text = render(format, &tests, &paths, config, template)?;
            write_text(default_output(&paths, format), &text)?;
        }
        return Ok(());
    };

    let text = render(format, &tests, &paths, config, template)?;
    match &options.output {
        Some(path) => write_text(path, &text)?,
        None => {
            stdout.write_all(text.as_bytes()).context("Failed to write to stdout")?;
            if !text.ends_with('\n') {
                writeln!(stdout).context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}

fn execute<W: Write>(args: ManifestArgs, stdout: &mut W) -> Result<()> {
    let format = args.format.as_deref().map(str::parse::<Format>).transpose()?;
    let template = load_template(args.template.as_deref(), Template::manifest_default)?;
    let options = ManifestOptions {
        dir: args.dir,
        format,
        output: args.output,
        touch: args.touch,
    };
    run(&options, &ManifestConfig::default(), &template, stdout)
}

/// Runs `rdfc-manifest` on `argv` (program name first) and returns its exit
/// status.
///
/// `-?`/`--help` prints usage to `stderr` and fails, as do usage errors and
/// unknown formats.
pub fn main_with<I, T, W, E>(argv: I, stdout: &mut W, stderr: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let Some(args) = parse_args::<ManifestArgs, _, _, _>(argv, |a| a.help, stderr) else {
        return EXIT_FAILURE;
    };
    init_logger(args.quiet);
    finish(execute(args, stdout))
}
