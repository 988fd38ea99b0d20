//! Renders the vocabulary documentation page from compacted JSON-LD nodes.

use serde_json::Value;

use crate::beautify::beautify;
use crate::linker::{anchor_href, fragment_from_iri};
use crate::renderer::{escape_html, Template};

const TITLE_KEYS: &[&str] = &["rdfs:label", "dc:title", "dcterms:title"];
const COMMENT_KEYS: &[&str] = &["rdfs:comment", "dc:description", "dcterms:description"];

/// Renders the vocabulary page.
///
/// `ontology` is the vocabulary root node, if the graph has one; `classes`
/// and `properties` are rendered in the order given.
pub fn render_vocab_html(
    ontology: Option<&Value>,
    classes: &[&Value],
    properties: &[&Value],
    template: &Template,
) -> String {
    let title = ontology
        .and_then(|o| first_literal(o, TITLE_KEYS))
        .unwrap_or_else(|| "Vocabulary".to_owned());
    let comment = ontology
        .and_then(|o| first_literal(o, COMMENT_KEYS))
        .unwrap_or_default();
    let iri = ontology.and_then(|o| o["@id"].as_str()).unwrap_or_default();

    let title = escape_html(&title);
    let comment = escape_html(&comment);
    let iri = escape_html(iri);
    let classes: Vec<String> = classes.iter().map(|c| render_class(c)).collect();
    let classes = classes.join("\n");
    let properties: Vec<String> = properties.iter().map(|p| render_property(p)).collect();
    let properties = properties.join("\n");

    let html = template.render(&[
        ("title", title.as_str()),
        ("comment", comment.as_str()),
        ("iri", iri.as_str()),
        ("classes", classes.as_str()),
        ("properties", properties.as_str()),
    ]);
    beautify(&html)
}

/// Returns the lexical form of a literal value (plain string or `@value` object).
pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get("@value").and_then(literal),
        Value::Array(items) => items.iter().find_map(literal),
        Value::Null => None,
    }
}

fn first_literal(node: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| literal(&node[*k]))
}

/// Collects referenced term ids (strings or `@id` objects, possibly in an array).
fn references(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Object(map) => map.get("@id").and_then(Value::as_str).into_iter().collect(),
        Value::Array(items) => items.iter().flat_map(references).collect(),
        _ => Vec::new(),
    }
}

fn reference_links(value: &Value) -> String {
    references(value)
        .into_iter()
        .map(|r| {
            format!(
                "<a href=\"{}\"><code>{}</code></a>",
                escape_html(&anchor_href(r)),
                escape_html(r)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn term_header(node: &Value) -> String {
    let id = node["@id"].as_str().unwrap_or_default();
    let fragment = fragment_from_iri(id);
    let label = literal(&node["rdfs:label"]).unwrap_or_else(|| fragment.clone());
    format!(
        "<dt id=\"{fragment}\"><a href=\"#{fragment}\">{label}</a> <code>{id}</code></dt>",
        fragment = escape_html(&fragment),
        label = escape_html(&label),
        id = escape_html(id),
    )
}

fn detail(label: &str, value: &Value) -> Option<String> {
    let links = reference_links(value);
    (!links.is_empty()).then(|| format!("<p>{label}: {links}</p>"))
}

fn comment_paragraph(node: &Value) -> String {
    literal(&node["rdfs:comment"])
        .map(|c| format!("<p>{}</p>", escape_html(&c)))
        .unwrap_or_default()
}

fn render_class(node: &Value) -> String {
    let mut dd = vec![comment_paragraph(node)];
    dd.extend(detail("Subclass of", &node["rdfs:subClassOf"]));
    format!("{}\n<dd>\n{}\n</dd>", term_header(node), dd.join("\n"))
}

fn render_property(node: &Value) -> String {
    let mut dd = vec![comment_paragraph(node)];
    dd.extend(detail("Domain", &node["rdfs:domain"]));
    dd.extend(detail("Range", &node["rdfs:range"]));
    format!("{}\n<dd>\n{}\n</dd>", term_header(node), dd.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_classes_and_properties() {
        let ontology = json!({
            "@id": "https://w3c.github.io/rdf-canon/tests/vocab#",
            "dc:title": "RDF Canonicalization Test Vocabulary",
            "rdfs:comment": "Terms used by the test suite."
        });
        let class = json!({
            "@id": "rdfc:RDFC10EvalTest",
            "@type": "rdfs:Class",
            "rdfs:label": "RDFC-1.0 Evaluation Test",
            "rdfs:comment": "Canonicalization test.",
            "rdfs:subClassOf": {"@id": "rdfc:Test"}
        });
        let property = json!({
            "@id": "rdfc:hashAlgorithm",
            "@type": "rdf:Property",
            "rdfs:label": "hash algorithm",
            "rdfs:domain": {"@id": "rdfc:Test"},
            "rdfs:range": {"@id": "xsd:string"}
        });

        let html = render_vocab_html(
            Some(&ontology),
            &[&class],
            &[&property],
            &Template::vocab_default(),
        );
        assert!(html.contains("<h1>RDF Canonicalization Test Vocabulary</h1>"));
        assert!(html.contains("<dt id=\"RDFC10EvalTest\">"));
        assert!(html.contains("Subclass of: <a href=\"#Test\"><code>rdfc:Test</code></a>"));
        assert!(html.contains("Range: <a href=\"#string\"><code>xsd:string</code></a>"));
        assert!(html.contains("<dt id=\"hashAlgorithm\">"));
    }

    #[test]
    fn missing_ontology_falls_back_to_default_title() {
        let html = render_vocab_html(None, &[], &[], &Template::vocab_default());
        assert!(html.contains("<h1>Vocabulary</h1>"));
    }

    #[test]
    fn literal_forms() {
        assert_eq!(literal(&json!("x")), Some("x".to_owned()));
        assert_eq!(literal(&json!({"@value": "y", "@language": "en"})), Some("y".to_owned()));
        assert_eq!(literal(&json!([{"@value": "z"}])), Some("z".to_owned()));
        assert_eq!(literal(&Value::Null), None);
    }
}
