//! Owned RDF terms used as node references.
//!
//! A [`Node`] names a position in a [`ManifestGraph`](crate::graph::ManifestGraph).
//! Nodes are detached from the store that produced them: they own their
//! strings, compare by value, and can be handed back to the graph for lookups.

use std::fmt;

/// An RDF literal: lexical form plus datatype IRI and optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The lexical form (e.g., `"4700"`).
    pub lexical: String,
    /// Full IRI of the datatype (e.g., `xsd:integer`).
    pub datatype: String,
    /// Language tag for `rdf:langString` literals.
    pub language: Option<String>,
}

/// A node reference: an IRI, a blank node, or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A named resource.
    Iri(String),
    /// A blank node, by its store-local identifier (without the `_:` prefix).
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Creates a blank node.
    pub fn blank(id: impl Into<String>) -> Self {
        Node::Blank(id.into())
    }

    /// Creates a typed literal node.
    pub fn literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Node::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Returns the stringified form: the IRI, the blank node id, or the
    /// literal's lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Node::Iri(iri) => iri,
            Node::Blank(id) => id,
            Node::Literal(lit) => &lit.lexical,
        }
    }

    /// Returns the IRI if this node is a named resource.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true if this node is the IRI `iri`.
    #[must_use]
    pub fn is_iri(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }

    /// Returns true for nodes that can appear in subject position.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        !matches!(self, Node::Literal(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Node {
    fn from(iri: &str) -> Self {
        Node::iri(iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringifies_like_its_lexical_form() {
        assert_eq!(Node::iri("http://example.org/a").to_string(), "http://example.org/a");
        assert_eq!(Node::blank("b0").to_string(), "b0");
        let lit = Node::literal("4700", "http://www.w3.org/2001/XMLSchema#integer");
        assert_eq!(lit.to_string(), "4700");
    }

    #[test]
    fn literals_are_not_resources() {
        assert!(Node::iri("http://example.org/a").is_resource());
        assert!(Node::blank("b1").is_resource());
        assert!(!Node::literal("x", "http://www.w3.org/2001/XMLSchema#string").is_resource());
    }

    #[test]
    fn iri_comparison() {
        let node = Node::from("http://example.org/a");
        assert!(node.is_iri("http://example.org/a"));
        assert!(!node.is_iri("http://example.org/b"));
        assert!(!Node::blank("http://example.org/a").is_iri("http://example.org/a"));
    }
}
