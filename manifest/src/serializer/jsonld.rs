//! JSON-LD serializer for the test manifest.
//!
//! Produces a single document with a fixed `@context` and an `entries`
//! array, one object per enabled test variant. Keys keep insertion order
//! and the output is pretty-printed with a two-space indent, so the same
//! input always yields byte-identical output.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ManifestConfig;
use crate::model::{entries, Entry, Test};

/// Returns the fixed `@context` of the manifest.
#[must_use]
pub fn context() -> Value {
    json!({
        "@base": "manifest",
        "xsd": "http://www.w3.org/2001/XMLSchema#",
        "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
        "mf": "http://www.w3.org/2001/sw/DataAccess/tests/test-manifest#",
        "mq": "http://www.w3.org/2001/sw/DataAccess/tests/test-query#",
        "rdfc": "https://w3c.github.io/rdf-canon/tests/vocab#",
        "rdft": "http://www.w3.org/ns/rdftest#",
        "id": "@id",
        "type": "@type",
        "action": {"@id": "mf:action", "@type": "@id"},
        "approval": {"@id": "rdft:approval", "@type": "@id"},
        "comment": "rdfs:comment",
        "entries": {"@id": "mf:entries", "@type": "@id", "@container": "@list"},
        "hashAlgorithm": "rdfc:hashAlgorithm",
        "label": "rdfs:label",
        "name": "mf:name",
        "computationalComplexity": "rdfc:computationalComplexity",
        "result": {"@id": "mf:result", "@type": "@id"}
    })
}

#[derive(Serialize)]
struct ManifestDocument<'a> {
    #[serde(rename = "@context")]
    context: Value,
    id: &'static str,
    #[serde(rename = "type")]
    type_: &'static str,
    label: &'a str,
    comment: &'a str,
    entries: Vec<EntryObject<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryObject<'a> {
    id: String,
    #[serde(rename = "type")]
    type_: &'a str,
    name: &'a str,
    comment: Option<&'a str>,
    computational_complexity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash_algorithm: Option<&'a str>,
    approval: &'a str,
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a str>,
}

impl<'a> From<&'a Entry> for EntryObject<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            id: format!("#{}", entry.anchor),
            type_: &entry.type_,
            name: &entry.name,
            comment: entry.comment.as_deref(),
            computational_complexity: entry.computational_complexity.as_str(),
            hash_algorithm: entry.hash_algorithm.as_deref(),
            approval: &entry.approval,
            action: &entry.action,
            result: entry.result.as_deref(),
        }
    }
}

/// Serializes the manifest to a JSON-LD `Value`.
///
/// # Errors
///
/// Returns an error only if `serde_json` rejects the document, which the
/// manifest types never trigger in practice.
pub fn to_json_ld(tests: &[Test], config: &ManifestConfig) -> serde_json::Result<Value> {
    let entries = entries(tests);
    let document = ManifestDocument {
        context: context(),
        id: "manifest",
        type_: "mf:Manifest",
        label: &config.title,
        comment: &config.description,
        entries: entries.iter().map(EntryObject::from).collect(),
    };
    serde_json::to_value(document)
}

/// Serializes the manifest to pretty-printed JSON-LD text.
///
/// # Errors
///
/// See [`to_json_ld`].
pub fn to_json_ld_string(tests: &[Test], config: &ManifestConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_json_ld(tests, config)?)
}
