//! The graph seam: a small capability trait over the RDF engine.
//!
//! Typed resources only ever talk to [`GraphStore`]; [`ManifestGraph`] is the
//! single implementation, backed by a sophia [`LightDataset`] filled by the
//! JSON-LD parser. The store is never mutated after [`ManifestGraph::from_jsonld`].

use std::sync::Arc;

use sophia_api::dataset::Dataset;
use sophia_api::parser::QuadParser;
use sophia_api::quad::Quad;
use sophia_api::source::QuadSource;
use sophia_api::term::matcher::Any;
use sophia_api::term::{BnodeId, IriRef, Term, TermKind};
use sophia_inmem::dataset::LightDataset;
use sophia_jsonld::loader::NoLoader;
use sophia_jsonld::vocabulary::ArcIri;
use sophia_jsonld::{JsonLdOptions, JsonLdParser};
use tracing::debug;

use crate::error::{Error, Result};
use crate::namespaces::Namespaces;
use crate::node::{Literal, Node};

/// Read-only lookups over a triple store.
///
/// Only the three primitive lookups are required; single-value accessors are
/// derived from them and fail with [`Error::NotFound`] instead of defaulting.
pub trait GraphStore {
    /// All objects of `(subject, predicate, ?)`, in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or yields an unsupported term.
    fn objects(&self, subject: &Node, predicate: &str) -> Result<Vec<Node>>;

    /// All subjects of `(?, predicate, object)`, in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or yields an unsupported term.
    fn subjects(&self, predicate: &str, object: &Node) -> Result<Vec<Node>>;

    /// Every `(predicate, object)` pair with `subject` in subject position.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or yields an unsupported term.
    fn outgoing(&self, subject: &Node) -> Result<Vec<(String, Node)>>;

    /// The first object of `(subject, predicate, ?)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the property is absent.
    fn value(&self, subject: &Node, predicate: &str) -> Result<Node> {
        self.optional_value(subject, predicate)?.ok_or_else(|| {
            debug!(%subject, predicate, "property not found");
            Error::not_found(subject, predicate)
        })
    }

    /// The first object of `(subject, predicate, ?)`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    fn optional_value(&self, subject: &Node, predicate: &str) -> Result<Option<Node>> {
        Ok(self.objects(subject, predicate)?.into_iter().next())
    }

    /// The first subject of `(?, predicate, object)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no subject matches.
    fn subject(&self, predicate: &str, object: &Node) -> Result<Node> {
        self.subjects(predicate, object)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                debug!(%object, predicate, "no subject found");
                Error::not_found(&format!("?s (object {object})"), predicate)
            })
    }
}

/// An immutable, parsed manifest graph plus its namespace bindings.
#[derive(Debug)]
pub struct ManifestGraph {
    dataset: LightDataset,
    namespaces: &'static Namespaces,
}

impl ManifestGraph {
    /// Parses a JSON-LD document into a graph and binds the standard
    /// namespace table.
    ///
    /// Remote contexts are not fetched: the document must carry its context
    /// inline (see [`crate::loader::inline_context`]). Relative IRIs resolve
    /// against a placeholder base; use [`ManifestGraph::from_jsonld_with_base`]
    /// when the document location is known.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the document is not valid JSON-LD.
    pub fn from_jsonld(document: &str) -> Result<Self> {
        Self::from_jsonld_with_base(document, None)
    }

    /// Parses a JSON-LD document, resolving relative IRIs (such as
    /// `viewingHint` values) against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `base` is not an absolute IRI,
    /// and [`Error::Parse`] if the document is not valid JSON-LD.
    pub fn from_jsonld_with_base(document: &str, base: Option<&str>) -> Result<Self> {
        let mut options = JsonLdOptions::new().with_default_document_loader::<NoLoader>();
        if let Some(base) = base {
            let iri = ArcIri::new(Arc::from(base)).map_err(|e| Error::InvalidIdentifier {
                identifier: base.to_owned(),
                reason: e.to_string(),
            })?;
            options = options.with_base(iri);
        }
        let dataset: LightDataset = JsonLdParser::new_with_options(options)
            .parse_str(document)
            .collect_quads()
            .map_err(|e| Error::Parse(e.to_string()))?;
        let graph = ManifestGraph {
            dataset,
            namespaces: Namespaces::standard(),
        };
        debug!(quads = graph.len(), base, "parsed JSON-LD document");
        Ok(graph)
    }

    /// The namespace table bound to this graph.
    #[must_use]
    pub fn namespaces(&self) -> &'static Namespaces {
        self.namespaces
    }

    /// Number of triples in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dataset.quads().count()
    }

    /// Returns true if the document produced no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn objects_of<S: Term>(&self, subject: S, predicate: &str) -> Result<Vec<Node>> {
        let mut objects = Vec::new();
        for quad in self
            .dataset
            .quads_matching([subject], [IriRef::new_unchecked(predicate)], Any, Any)
        {
            let quad = quad.map_err(store_error)?;
            objects.push(to_node(quad.o())?);
        }
        Ok(objects)
    }

    fn outgoing_of<S: Term>(&self, subject: S) -> Result<Vec<(String, Node)>> {
        let mut pairs = Vec::new();
        for quad in self.dataset.quads_matching([subject], Any, Any, Any) {
            let quad = quad.map_err(store_error)?;
            let predicate = to_node(quad.p())?;
            pairs.push((predicate.as_str().to_owned(), to_node(quad.o())?));
        }
        Ok(pairs)
    }
}

impl GraphStore for ManifestGraph {
    fn objects(&self, subject: &Node, predicate: &str) -> Result<Vec<Node>> {
        match subject {
            Node::Iri(iri) => self.objects_of(IriRef::new_unchecked(iri.as_str()), predicate),
            Node::Blank(id) => self.objects_of(BnodeId::new_unchecked(id.as_str()), predicate),
            Node::Literal(_) => Ok(Vec::new()),
        }
    }

    fn subjects(&self, predicate: &str, object: &Node) -> Result<Vec<Node>> {
        let mut subjects = Vec::new();
        for quad in self
            .dataset
            .quads_matching(Any, [IriRef::new_unchecked(predicate)], Any, Any)
        {
            let quad = quad.map_err(store_error)?;
            if &to_node(quad.o())? == object {
                subjects.push(to_node(quad.s())?);
            }
        }
        Ok(subjects)
    }

    fn outgoing(&self, subject: &Node) -> Result<Vec<(String, Node)>> {
        match subject {
            Node::Iri(iri) => self.outgoing_of(IriRef::new_unchecked(iri.as_str())),
            Node::Blank(id) => self.outgoing_of(BnodeId::new_unchecked(id.as_str())),
            Node::Literal(_) => Ok(Vec::new()),
        }
    }
}

fn store_error(e: impl std::fmt::Display) -> Error {
    Error::Graph(e.to_string())
}

/// Copies a sophia term into an owned [`Node`].
fn to_node<T: Term>(term: T) -> Result<Node> {
    let node = match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_owned())),
        TermKind::Literal => match (term.lexical_form(), term.datatype()) {
            (Some(lexical), Some(datatype)) => Some(Node::Literal(Literal {
                lexical: String::from(&*lexical),
                datatype: datatype.as_str().to_owned(),
                language: term.language_tag().map(|tag| tag.as_str().to_owned()),
            })),
            _ => None,
        },
        _ => None,
    };
    node.ok_or_else(|| Error::Graph(format!("unsupported term kind {:?}", term.kind())))
}
