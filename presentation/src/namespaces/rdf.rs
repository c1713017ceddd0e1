//! `rdf:`, `rdfs:` and `xsd:` terms used by every resource kind.

use super::Namespace;

/// RDF namespace IRI.
pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace IRI.
pub const NS_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace IRI.
pub const NS_XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// `rdf:type`.
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:first`.
pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
/// `rdf:rest`.
pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
/// `rdf:nil`, the list terminator.
pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
/// `rdf:value`.
pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
/// `rdf:langString`.
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// `rdfs:label`.
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// Returns the `rdf:` namespace binding.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "rdf",
        iri: NS,
        label: "RDF",
    }
}

/// Returns the `rdfs:` namespace binding.
#[must_use]
pub fn rdfs_namespace() -> Namespace {
    Namespace {
        prefix: "rdfs",
        iri: NS_RDFS,
        label: "RDF Schema",
    }
}

/// Returns the `xsd:` namespace binding.
#[must_use]
pub fn xsd_namespace() -> Namespace {
    Namespace {
        prefix: "xsd",
        iri: NS_XSD,
        label: "XML Schema datatypes",
    }
}
