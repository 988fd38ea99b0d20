//! Resolves IRIs and compact IRIs to in-page anchors.

/// Extracts the local name of an IRI or compact IRI.
///
/// `https://w3c.github.io/rdf-canon/tests/vocab#RDFC10EvalTest` and
/// `rdfc:RDFC10EvalTest` both yield `RDFC10EvalTest`.
pub fn fragment_from_iri(iri: &str) -> String {
    let local = iri.rsplit(&['#', '/'][..]).next().unwrap_or(iri);
    local.rsplit(':').next().unwrap_or(local).to_string()
}

/// Returns an in-page link target for a term, e.g. `#RDFC10EvalTest`.
pub fn anchor_href(iri: &str) -> String {
    format!("#{}", fragment_from_iri(iri))
}
