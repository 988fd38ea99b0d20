//! Splits a compacted vocabulary graph into the ontology node, classes and properties.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use rdfc_docs::vocab_page::literal;

use crate::iris::{RDFC_TEST, RDFS_CLASS, RDFS_LABEL, RDF_PROPERTY, VOCAB_IRI};

/// Errors raised while partitioning a compacted document.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// The compacted document has no `@graph` array.
    #[error("compacted document has no `@graph` array")]
    MissingGraph,
}

/// Nodes of a compacted vocabulary, grouped for rendering.
#[derive(Debug, Default)]
pub struct VocabIndex<'a> {
    /// The node describing the vocabulary itself.
    pub ontology: Option<&'a Value>,
    /// Nodes typed `rdfs:Class` or `rdfc:Test`, sorted by label.
    pub classes: Vec<&'a Value>,
    /// Nodes typed `rdf:Property`, sorted by label.
    pub properties: Vec<&'a Value>,
}

/// Term and prefix mappings of an embedded `@context`, enough to read
/// compact IRIs back as absolute ones.
struct Prefixes<'a>(BTreeMap<&'a str, &'a str>);

impl<'a> Prefixes<'a> {
    fn of(compacted: &'a Value) -> Self {
        let mut mappings = BTreeMap::new();
        if let Some(context) = compacted.get("@context").and_then(Value::as_object) {
            for (term, definition) in context {
                let iri = match definition {
                    Value::String(iri) => iri.as_str(),
                    Value::Object(object) => match object.get("@id").and_then(Value::as_str) {
                        Some(iri) => iri,
                        None => continue,
                    },
                    _ => continue,
                };
                mappings.insert(term.as_str(), iri);
            }
        }
        Self(mappings)
    }

    fn expand(&self, name: &str) -> String {
        if let Some(iri) = self.0.get(name) {
            return (*iri).to_owned();
        }
        match name.split_once(':') {
            Some((prefix, suffix)) if !suffix.starts_with("//") => match self.0.get(prefix) {
                Some(namespace) => format!("{namespace}{suffix}"),
                None => name.to_owned(),
            },
            _ => name.to_owned(),
        }
    }
}

fn types<'a>(node: &'a Value) -> Vec<&'a str> {
    match node.get("@type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(ts)) => ts.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Partitions the `@graph` of a compacted document, reading compact IRIs
/// through the document's own `@context`.
///
/// A node may be both a class and a property. Ties in label order keep graph order.
///
/// # Errors
///
/// Returns [`PartitionError::MissingGraph`] if `compacted` has no `@graph` array.
pub fn partition(compacted: &Value) -> Result<VocabIndex<'_>, PartitionError> {
    let graph = compacted
        .get("@graph")
        .and_then(Value::as_array)
        .ok_or(PartitionError::MissingGraph)?;
    let prefixes = Prefixes::of(compacted);

    let mut index = VocabIndex::default();
    for node in graph {
        let id = node.get("@id").and_then(Value::as_str).unwrap_or_default();
        if index.ontology.is_none() && prefixes.expand(id) == VOCAB_IRI {
            index.ontology = Some(node);
        }
        let node_types: Vec<String> = types(node).into_iter().map(|t| prefixes.expand(t)).collect();
        if node_types.iter().any(|t| t == RDFS_CLASS || t == RDFC_TEST) {
            index.classes.push(node);
        }
        if node_types.iter().any(|t| t == RDF_PROPERTY) {
            index.properties.push(node);
        }
    }

    let label = |node: &&Value| {
        node.as_object()
            .and_then(|map| map.iter().find(|(key, _)| prefixes.expand(key) == RDFS_LABEL))
            .and_then(|(_, value)| literal(value))
            .unwrap_or_default()
    };
    index.classes.sort_by_cached_key(label);
    index.properties.sort_by_cached_key(label);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(graph: Value) -> Value {
        json!({
            "@context": {
                "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
                "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
                "rdfc": "https://w3c.github.io/rdf-canon/tests/vocab#",
                "label": {"@id": "http://www.w3.org/2000/01/rdf-schema#label"}
            },
            "@graph": graph
        })
    }

    #[test]
    fn groups_and_sorts_by_label() {
        let doc = document(json!([
            {"@id": "https://w3c.github.io/rdf-canon/tests/vocab#", "rdfs:label": "Vocab"},
            {"@id": "rdfc:Zeta", "@type": "rdfs:Class", "rdfs:label": "Zeta"},
            {"@id": "rdfc:Test", "@type": ["rdfs:Class"], "rdfs:label": "Alpha"},
            {"@id": "rdfc:Eval", "@type": "rdfc:Test", "rdfs:label": "Middle"},
            {"@id": "rdfc:prop", "@type": "rdf:Property", "rdfs:label": "prop"},
            {"@id": "rdfc:other", "rdfs:label": "ignored"}
        ]));
        let index = partition(&doc).expect("partition");
        assert_eq!(index.ontology.map(|o| &o["rdfs:label"]), Some(&json!("Vocab")));
        let classes: Vec<&str> = index.classes.iter().filter_map(|c| c["@id"].as_str()).collect();
        assert_eq!(classes, ["rdfc:Test", "rdfc:Eval", "rdfc:Zeta"]);
        assert_eq!(index.properties.len(), 1);
    }

    #[test]
    fn reads_terms_and_absolute_iris() {
        let doc = document(json!([
            {"@id": "rdfc:b", "@type": "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property", "label": "b"},
            {"@id": "rdfc:a", "@type": "rdf:Property", "label": "a"}
        ]));
        let index = partition(&doc).expect("partition");
        let properties: Vec<&str> = index.properties.iter().filter_map(|p| p["@id"].as_str()).collect();
        assert_eq!(properties, ["rdfc:a", "rdfc:b"]);
        assert!(index.ontology.is_none());
    }

    #[test]
    fn missing_graph_is_an_error() {
        assert!(matches!(
            partition(&json!({"@id": "x"})),
            Err(PartitionError::MissingGraph)
        ));
    }
}
