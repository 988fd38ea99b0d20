//! Turtle serializer for the test manifest.
//!
//! Emits the license header and prefixes, the `<manifest>` resource whose
//! `mf:entries` collection lists every entry anchor, then one description
//! block per entry.

use std::fmt::Write as _;

use crate::config::ManifestConfig;
use crate::model::{entries, Entry, Test};

/// Number of anchors per line inside the `mf:entries` collection.
pub const ANCHORS_PER_LINE: usize = 8;

const HEADER: &str = "\
## RDF Dataset Canonicalization tests
## Distributed under both the W3C Test Suite License[1] and the W3C 3-
## clause BSD License[2]. To contribute to a W3C Test Suite, see the
## policies and contribution forms [3]
##
## 1. http://www.w3.org/Consortium/Legal/2008/04-testsuite-license
## 2. http://www.w3.org/Consortium/Legal/2008/03-bsd-license
## 3. http://www.w3.org/2004/10/27-testcases
##
## This file is generated automatically from manifest.csv, and should not be edited directly.
##
## Test types
## * rdfc:RDFC10EvalTest – Canonicalization using RDFC-1.0
## * rdfc:RDFC10MapTest  – RDFC-1.0 Issued Identifiers Test

@prefix : <manifest#> .
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix mf:   <http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#> .
@prefix rdfc: <https://w3c.github.io/rdf-canon/tests/vocab#> .
@prefix rdft: <http://www.w3.org/ns/rdftest#> .

<manifest>  a mf:Manifest ;";

/// Serializes the manifest to a Turtle string.
#[must_use]
pub fn to_turtle(tests: &[Test], config: &ManifestConfig) -> String {
    let entries = entries(tests);
    let mut lines: Vec<String> = vec![HEADER.to_owned()];

    lines.push(format!("  rdfs:label {};", turtle_string(&config.title)));
    lines.push(format!("  rdfs:comment {};", turtle_string(&config.description)));
    lines.push("  mf:entries (".to_owned());
    let anchors: Vec<String> = entries.iter().map(|e| format!(":{}", e.anchor)).collect();
    for chunk in anchors.chunks(ANCHORS_PER_LINE) {
        lines.push(format!("    {}", chunk.join(" ")));
    }
    lines.push("  ) .".to_owned());

    for entry in &entries {
        lines.push(String::new());
        lines.push(entry_block(entry));
    }

    lines.join("\n")
}

fn entry_block(entry: &Entry) -> String {
    let mut block = format!(":{} a {};\n", entry.anchor, entry.type_);
    // Writing to a String cannot fail.
    let _ = writeln!(block, "  mf:name {};", turtle_string(&entry.name));
    if let Some(comment) = &entry.comment {
        let _ = writeln!(block, "  rdfs:comment {};", turtle_string(comment));
    }
    if let Some(hash) = &entry.hash_algorithm {
        let _ = writeln!(block, "  rdfc:hashAlgorithm {};", turtle_string(hash));
    }
    let _ = writeln!(
        block,
        "  rdfc:computationalComplexity \"{}\";",
        entry.computational_complexity.as_str()
    );
    let _ = writeln!(block, "  rdft:approval {};", entry.approval);
    let _ = writeln!(block, "  mf:action <{}>;", entry.action);
    if let Some(result) = &entry.result {
        let _ = writeln!(block, "  mf:result <{result}>;");
    }
    block.push_str("  .");
    block
}

/// Quotes `s` as a Turtle short string literal.
///
/// Backslashes are written as given: manifest cells already carry them
/// doubled from loading.
#[must_use]
pub fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{escaped}\"")
}
