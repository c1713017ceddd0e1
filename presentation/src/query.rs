//! Bound graph-pattern queries over list-valued properties.
//!
//! Evaluates the pattern
//!
//! ```text
//! ?start <link> ?list .
//! ?list rdf:rest*/rdf:first ?item .
//! ```
//!
//! with `?start` bound. The `rdf:rest*` path has set semantics: each list
//! node is visited once, so cycles terminate and a missing terminator simply
//! ends the walk. For well-formed lists the items match [`crate::rdf_list`],
//! but this operator never reports [`crate::Error::MalformedList`] or a
//! missing `rdf:rest`.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::GraphStore;
use crate::namespaces::rdf;
use crate::node::Node;

/// One solution: variable name → bound node.
pub type Binding = HashMap<&'static str, Node>;

/// A `?start <link> ?list . ?list rdf:rest*/rdf:first ?item` query.
#[derive(Debug, Clone)]
pub struct PathQuery {
    link: String,
    list_var: &'static str,
    item_var: &'static str,
}

impl PathQuery {
    /// Creates a query following `link` from the start node into an RDF list.
    /// Solutions bind the list head as `list` and each element as `item`.
    pub fn list_members(link: impl Into<String>) -> Self {
        PathQuery {
            link: link.into(),
            list_var: "list",
            item_var: "item",
        }
    }

    /// Renames the variable the elements are bound to.
    #[must_use]
    pub fn select(mut self, item_var: &'static str) -> Self {
        self.item_var = item_var;
        self
    }

    /// Name of the element variable.
    #[must_use]
    pub fn item_var(&self) -> &'static str {
        self.item_var
    }

    /// Evaluates the query with `?start` bound to `start`.
    ///
    /// Solutions come out in traversal order: lists in the order the store
    /// yields the `link` triples, elements breadth-first along `rdf:rest`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn execute<G: GraphStore + ?Sized>(&self, graph: &G, start: &Node) -> Result<Vec<Binding>> {
        let mut solutions = Vec::new();
        for list in graph.objects(start, &self.link)? {
            let mut visited = HashSet::new();
            let mut queue = VecDeque::from([list.clone()]);
            while let Some(cell) = queue.pop_front() {
                if !visited.insert(cell.clone()) {
                    continue;
                }
                for item in graph.objects(&cell, rdf::FIRST)? {
                    trace!(%cell, %item, "path solution");
                    solutions.push(Binding::from([
                        ("start", start.clone()),
                        (self.list_var, list.clone()),
                        (self.item_var, item),
                    ]));
                }
                queue.extend(graph.objects(&cell, rdf::REST)?);
            }
        }
        debug!(%start, link = %self.link, solutions = solutions.len(), "path query");
        Ok(solutions)
    }

    /// Evaluates the query and projects the element variable.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn items<G: GraphStore + ?Sized>(&self, graph: &G, start: &Node) -> Result<Vec<Node>> {
        Ok(self
            .execute(graph, start)?
            .into_iter()
            .filter_map(|mut binding| binding.remove(self.item_var))
            .collect())
    }
}
