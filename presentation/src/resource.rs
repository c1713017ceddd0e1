//! The shared resource record and the capabilities every kind exposes.
//!
//! Each typed view ([`Manifest`](crate::Manifest), [`Sequence`](crate::Sequence),
//! [`Canvas`](crate::Canvas), [`Annotation`](crate::Annotation)) embeds one
//! [`Resource`] and implements [`Described`]; the identifier, type, label and
//! JSON-LD accessors come from the trait's provided methods.

use std::sync::{Arc, OnceLock};

use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::graph::{GraphStore, ManifestGraph};
use crate::namespaces::rdf;
use crate::node::Node;
use crate::serializer::jsonld;

/// A node reference paired with the graph it lives in.
///
/// Cloning is cheap: the graph is shared, never copied.
#[derive(Debug, Clone)]
pub struct Resource {
    node: Node,
    graph: Arc<ManifestGraph>,
    list_limit: usize,
}

impl Resource {
    /// Wraps `node` in `graph`. `list_limit` bounds every RDF list decoded
    /// from this resource and the resources reached through it.
    pub fn new(node: Node, graph: Arc<ManifestGraph>, list_limit: usize) -> Self {
        Resource {
            node,
            graph,
            list_limit,
        }
    }

    /// The wrapped node.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The shared graph.
    #[must_use]
    pub fn graph(&self) -> &Arc<ManifestGraph> {
        &self.graph
    }

    /// Hop bound for list decoding.
    #[must_use]
    pub fn list_limit(&self) -> usize {
        self.list_limit
    }

    /// A resource for `node` in the same graph, with the same list bound.
    #[must_use]
    pub fn child(&self, node: Node) -> Resource {
        Resource::new(node, Arc::clone(&self.graph), self.list_limit)
    }

    pub(crate) fn value(&self, predicate: &str) -> Result<Node> {
        self.graph.value(&self.node, predicate)
    }

    pub(crate) fn optional_string(&self, predicate: &str) -> Result<Option<String>> {
        Ok(self
            .graph
            .optional_value(&self.node, predicate)?
            .map(|node| node.to_string()))
    }

    /// Reads the single value of `predicate` as a positive integer.
    pub(crate) fn positive_integer(&self, predicate: &str) -> Result<u32> {
        let value = self.value(predicate)?;
        let lexical = match &value {
            Node::Literal(lit) => lit.lexical.trim(),
            other => other.as_str(),
        };
        match lexical.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Error::TypeCoercion {
                subject: self.node.to_string(),
                predicate: predicate.to_owned(),
                lexical: lexical.to_owned(),
            }),
        }
    }

    /// The final `/`-separated segment of the identifier.
    pub(crate) fn name(&self) -> &str {
        let id = self.node.as_str();
        match id.rfind('/') {
            Some(i) => &id[i + 1..],
            None => id,
        }
    }
}

/// Identity, typing, labelling and export shared by all resource kinds.
pub trait Described {
    /// The embedded resource record.
    fn resource(&self) -> &Resource;

    /// The wrapped node.
    fn node(&self) -> &Node {
        self.resource().node()
    }

    /// The node's identifier (its IRI for named resources).
    fn identifier(&self) -> &str {
        self.resource().node().as_str()
    }

    /// The identifier parsed as a dereferenceable http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if the identifier does not parse
    /// or uses another scheme.
    fn parsed_identifier(&self) -> Result<Url> {
        let identifier = self.identifier();
        let invalid = |reason: String| Error::InvalidIdentifier {
            identifier: identifier.to_owned(),
            reason,
        };
        let url = Url::parse(identifier).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
        }
    }

    /// IRI of the first `rdf:type` of the node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the node is untyped.
    fn type_iri(&self) -> Result<String> {
        Ok(self.resource().value(rdf::TYPE)?.to_string())
    }

    /// The node's `rdfs:label`, stringified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the node has no label.
    fn label(&self) -> Result<String> {
        Ok(self.resource().value(rdf::LABEL)?.to_string())
    }

    /// A standalone JSON-LD snapshot of the node's own triples.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn as_jsonld(&self) -> Result<Value> {
        let resource = self.resource();
        jsonld::node_to_json_ld(resource.graph().as_ref(), resource.node())
    }
}

impl Described for Resource {
    fn resource(&self) -> &Resource {
        self
    }
}

/// Returns the value in `cell`, computing it with `init` on first access.
///
/// A failed `init` leaves the cell empty. If two threads race, the first
/// stored value wins and the other computed value is dropped.
pub(crate) fn cached<T>(cell: &OnceLock<T>, init: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}
