//! RDF list decoding.
//!
//! An RDF list is a chain of nodes, each carrying one element under
//! `rdf:first` and the next node under `rdf:rest`, terminated by `rdf:nil`.
//! Decoding walks the chain iteratively; a chain that never reaches `rdf:nil`
//! within `max_len` hops, or that revisits a node, is reported as
//! [`Error::MalformedList`].

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::namespaces::rdf;
use crate::node::Node;

/// Default hop bound used by [`crate::FactoryConfig`].
pub const DEFAULT_MAX_LIST_LENGTH: usize = 100_000;

/// Decodes the list starting at `head` into its elements, in list order.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if a list node lacks `rdf:first` or `rdf:rest`,
/// and [`Error::MalformedList`] if the chain is cyclic or longer than `max_len`.
pub fn decode<G: GraphStore + ?Sized>(graph: &G, head: &Node, max_len: usize) -> Result<Vec<Node>> {
    decode_with(graph, head, max_len, |element| Ok(element))
}

/// Decodes the list starting at `head`, mapping each element through `f`
/// as it is reached.
///
/// # Errors
///
/// Same as [`decode`], plus any error returned by `f`.
pub fn decode_with<G, T, F>(graph: &G, head: &Node, max_len: usize, mut f: F) -> Result<Vec<T>>
where
    G: GraphStore + ?Sized,
    F: FnMut(Node) -> Result<T>,
{
    let mut items = Vec::new();
    let mut seen = HashSet::new();
    let mut node = head.clone();

    while !node.is_iri(rdf::NIL) {
        if items.len() >= max_len || !seen.insert(node.clone()) {
            debug!(%head, hops = items.len(), "RDF list not terminated");
            return Err(Error::MalformedList {
                head: head.to_string(),
                hops: items.len(),
            });
        }
        let element = graph.value(&node, rdf::FIRST)?;
        trace!(%node, %element, "list cell");
        items.push(f(element)?);
        node = graph.value(&node, rdf::REST)?;
    }

    debug!(%head, len = items.len(), "decoded RDF list");
    Ok(items)
}
