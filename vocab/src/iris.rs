//! Well-known IRIs.

/// `rdf:Property`
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
/// `rdfs:Class`
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:comment`
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// The RDFC test vocabulary namespace.
pub const VOCAB_IRI: &str = "https://w3c.github.io/rdf-canon/tests/vocab#";
/// `rdfc:Test`
pub const RDFC_TEST: &str = "https://w3c.github.io/rdf-canon/tests/vocab#Test";
