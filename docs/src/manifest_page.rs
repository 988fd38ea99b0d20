//! Renders the HTML index of the test manifest from `manifest.jsonld`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::beautify::beautify;
use crate::linker::fragment_from_iri;
use crate::renderer::{escape_html, Template};

/// Reads the JSON-LD manifest at `jsonld_path` and renders the index page.
///
/// The JSON-LD file is never regenerated here; it must have been written first.
///
/// # Errors
///
/// Returns an error if the file is missing, is not JSON, or has no `entries` array.
pub fn render_manifest_html(jsonld_path: &Path, template: &Template) -> Result<String> {
    let content = fs::read_to_string(jsonld_path)
        .with_context(|| format!("Failed to read {}", jsonld_path.display()))?;
    let manifest: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", jsonld_path.display()))?;
    render_manifest(&manifest, template)
        .with_context(|| format!("Cannot render {}", jsonld_path.display()))
}

/// Renders an already parsed JSON-LD manifest.
///
/// # Errors
///
/// Returns an error if `manifest` has no `entries` array.
pub fn render_manifest(manifest: &Value, template: &Template) -> Result<String> {
    let entries = manifest["entries"]
        .as_array()
        .context("manifest has no `entries` array")?;

    let rows: Vec<String> = entries.iter().map(render_entry).collect();
    let title = escape_html(text(&manifest["label"]));
    let comment = escape_html(text(&manifest["comment"]));
    let count = entries.len().to_string();
    let rows = rows.join("\n");
    let html = template.render(&[
        ("title", title.as_str()),
        ("comment", comment.as_str()),
        ("entry-count", count.as_str()),
        ("entries", rows.as_str()),
    ]);
    Ok(beautify(&html))
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn render_entry(entry: &Value) -> String {
    let anchor = text(&entry["id"]).trim_start_matches('#');
    let comment = match entry["comment"].as_str() {
        Some(c) => format!(
            "<div class=\"comment\">{}</div>",
            escape_html(c).replace('\n', "<br>")
        ),
        None => String::new(),
    };
    let approval = fragment_from_iri(text(&entry["approval"]));
    format!(
        "<tr id=\"{anchor}\">\n<td><a href=\"#{anchor}\">{anchor}</a></td>\n<td>{name}{comment}</td>\n<td>{type_}</td>\n<td>{complexity}</td>\n<td>{hash}</td>\n<td>{approval}</td>\n<td>{action}</td>\n<td>{result}</td>\n</tr>",
        anchor = escape_html(anchor),
        name = escape_html(text(&entry["name"])),
        comment = comment,
        type_ = escape_html(&fragment_from_iri(text(&entry["type"]))),
        complexity = escape_html(text(&entry["computationalComplexity"])),
        hash = escape_html(text(&entry["hashAlgorithm"])),
        approval = escape_html(&approval),
        action = file_link(&entry["action"]),
        result = file_link(&entry["result"]),
    )
}

fn file_link(value: &Value) -> String {
    match value.as_str() {
        Some(path) => {
            let label = path.rsplit('/').next().unwrap_or(path);
            format!(
                "<a href=\"{}\">{}</a>",
                escape_html(path),
                escape_html(label)
            )
        }
        None => String::new(),
    }
}
