//! Loads the vocabulary graph and prepares it for JSON-LD serialization.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use sophia_api::source::TripleSource;
use sophia_api::term::SimpleTerm;
use sophia_api::MownStr;

use crate::iris::RDFS_COMMENT;

/// An in-memory RDF graph.
pub type Graph = Vec<[SimpleTerm<'static>; 3]>;

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns an error if `source` is not valid Turtle.
pub fn parse_graph(source: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    sophia_turtle::parser::turtle::parse_str(source)
        .add_to_graph(&mut graph)
        .map_err(|e| anyhow!("failed to parse Turtle: {e}"))?;
    Ok(graph)
}

/// Reads and parses the Turtle file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid Turtle.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_graph(&source).with_context(|| format!("Cannot load {}", path.display()))
}

/// Collapses whitespace in `text`: trims it and turns every run into one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_comment(predicate: &SimpleTerm<'_>) -> bool {
    matches!(predicate, SimpleTerm::Iri(iri) if iri.as_str() == RDFS_COMMENT)
}

/// Normalizes the whitespace of every `rdfs:comment` literal, keeping its
/// datatype or language tag.
///
/// Returns the number of comments rewritten.
pub fn normalize_comments(graph: &mut Graph) -> usize {
    let mut rewritten = 0;
    for [_, predicate, object] in graph.iter_mut() {
        if !is_comment(predicate) {
            continue;
        }
        let (SimpleTerm::LiteralDatatype(lex, _) | SimpleTerm::LiteralLanguage(lex, ..)) = object
        else {
            continue;
        };
        let collapsed = collapse_whitespace(lex);
        if collapsed != **lex {
            *lex = MownStr::from(collapsed);
            rewritten += 1;
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: &str = r#"
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ex: <http://example.org/> .

        ex:A rdfs:comment """  Spread
            over   lines  """ .
        ex:B rdfs:comment "  Tagged\ttext "@en ;
            rdfs:label "  not   a comment " .
        ex:C rdfs:comment "Already tidy" .
    "#;

    fn lexical_forms(graph: &Graph) -> Vec<&str> {
        graph
            .iter()
            .filter_map(|[_, _, o]| match o {
                SimpleTerm::LiteralDatatype(lex, _) | SimpleTerm::LiteralLanguage(lex, ..) => {
                    Some(&**lex)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn comments_are_normalized() {
        let mut graph = parse_graph(TTL).expect("parse");
        assert_eq!(normalize_comments(&mut graph), 2);
        let forms = lexical_forms(&graph);
        assert!(forms.contains(&"Spread over lines"), "{forms:?}");
        assert!(forms.contains(&"Tagged text"), "{forms:?}");
        assert!(forms.contains(&"Already tidy"), "{forms:?}");
    }

    #[test]
    fn language_tags_survive_normalization() {
        let mut graph = parse_graph(TTL).expect("parse");
        normalize_comments(&mut graph);
        let tagged = graph.iter().find_map(|[_, _, o]| match o {
            SimpleTerm::LiteralLanguage(lex, tag, ..) => Some((lex.to_string(), tag.as_str().to_owned())),
            _ => None,
        });
        assert_eq!(tagged, Some(("Tagged text".to_owned(), "en".to_owned())));
    }

    #[test]
    fn other_literals_are_untouched() {
        let mut graph = parse_graph(TTL).expect("parse");
        normalize_comments(&mut graph);
        assert!(lexical_forms(&graph).contains(&"  not   a comment "));
    }

    #[test]
    fn load_graph_reads_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vocab.ttl");
        fs::write(&path, TTL).expect("write ttl");
        assert_eq!(load_graph(&path).expect("load").len(), 4);

        let err = load_graph(&dir.path().join("missing.ttl")).expect_err("missing");
        assert!(err.to_string().contains("missing.ttl"), "{err}");
    }

    #[test]
    fn invalid_turtle_is_an_error() {
        assert!(parse_graph("this is not turtle").is_err());
    }
}
