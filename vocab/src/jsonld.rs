//! JSON-LD serialization of the vocabulary graph.
//!
//! Both forms come from `sophia_jsonld`'s serializer with native types, so
//! `xsd:integer`, `xsd:double` and `xsd:boolean` literals become JSON
//! numbers and booleans. The compacted form is produced by the serializer
//! itself against a caller-supplied context document.

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use sophia_api::graph::Graph as _;
use sophia_api::serializer::QuadSerializer;
use sophia_jsonld::{JsonLdOptions, JsonLdSerializer};

use crate::graph::Graph;

fn parse_output(buffer: &[u8]) -> Result<Value> {
    serde_json::from_slice(buffer).context("JSON-LD serializer produced invalid JSON")
}

/// Converts `graph` to an array of expanded JSON-LD node objects.
///
/// # Errors
///
/// Returns an error if the graph cannot be serialized as JSON-LD.
pub fn to_expanded(graph: &Graph) -> Result<Vec<Value>> {
    let mut buffer = Vec::new();
    JsonLdSerializer::new_with_options(&mut buffer, JsonLdOptions::new().with_use_native_types(true))
        .serialize_dataset(&graph.as_dataset())
        .map_err(|e| anyhow!("JSON-LD serialization failed: {e}"))?;
    match parse_output(&buffer)? {
        Value::Array(nodes) => Ok(nodes),
        other => Ok(vec![other]),
    }
}

/// Converts `graph` to JSON-LD compacted against `context_document`.
///
/// The result always starts with the document's `@context` and holds its
/// nodes in an `@graph` array, even when the graph has a single subject.
///
/// # Errors
///
/// Returns an error if `context_document` is not a JSON object with a
/// `@context` member, or if compaction fails.
pub fn to_compacted(graph: &Graph, context_document: &str) -> Result<Value> {
    let document: Value =
        serde_json::from_str(context_document).context("Failed to parse context document as JSON")?;
    let context = document
        .get("@context")
        .filter(|c| c.is_object())
        .cloned()
        .context("Context document has no `@context` object")?;

    let options = JsonLdOptions::new()
        .with_use_native_types(true)
        .with_ordered(true)
        .try_with_compact_context(context_document)
        .map_err(|e| anyhow!("Invalid JSON-LD context: {e}"))?;
    let mut buffer = Vec::new();
    JsonLdSerializer::new_with_options(&mut buffer, options)
        .serialize_dataset(&graph.as_dataset())
        .map_err(|e| anyhow!("JSON-LD compaction failed: {e}"))?;
    Ok(with_context_and_graph(parse_output(&buffer)?, context))
}

/// Puts `context` first and wraps top-level node properties into `@graph`.
fn with_context_and_graph(compacted: Value, context: Value) -> Value {
    let mut document = Map::new();
    document.insert("@context".to_owned(), context);

    let mut node = match compacted {
        Value::Object(map) => map,
        Value::Array(nodes) => {
            document.insert("@graph".to_owned(), Value::Array(nodes));
            return Value::Object(document);
        }
        _ => Map::new(),
    };
    node.remove("@context");
    let graph = match node.remove("@graph") {
        Some(Value::Array(nodes)) => nodes,
        Some(single) => vec![single],
        None if node.is_empty() => Vec::new(),
        None => vec![Value::Object(node)],
    };
    document.insert("@graph".to_owned(), Value::Array(graph));
    Value::Object(document)
}
