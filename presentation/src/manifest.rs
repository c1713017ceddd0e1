//! The top-level resource of a IIIF document.

use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::graph::GraphStore;
use crate::namespaces::{rdf, sc, DCTERMS_RIGHTS, DC_DESCRIPTION};
use crate::rdf_list;
use crate::resource::{cached, Described, Resource};
use crate::sequence::Sequence;

/// An `sc:Manifest`: one digitized object, with its sequences and
/// descriptive metadata.
#[derive(Debug, Clone)]
pub struct Manifest {
    resource: Resource,
    sequences: OnceLock<Vec<Sequence>>,
    metadata: OnceLock<Metadata>,
}

impl Manifest {
    /// Wraps a manifest node.
    #[must_use]
    pub fn new(resource: Resource) -> Self {
        Manifest {
            resource,
            sequences: OnceLock::new(),
            metadata: OnceLock::new(),
        }
    }

    /// The manifest's sequences, in document order.
    ///
    /// Decoded from the `sc:hasSequences` list on first access and cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the manifest has no sequence list, or
    /// [`Error::MalformedList`] if the list is not terminated.
    pub fn sequences(&self) -> Result<&[Sequence]> {
        cached(&self.sequences, || {
            let head = self.resource.value(sc::HAS_SEQUENCES)?;
            rdf_list::decode_with(
                self.resource.graph().as_ref(),
                &head,
                self.resource.list_limit(),
                |node| Ok(Sequence::new(self.resource.child(node))),
            )
        })
        .map(Vec::as_slice)
    }

    /// The manifest's label/value metadata pairs, in document order.
    ///
    /// Decoded from the `sc:metadataLabels` list on first access and cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the manifest has no metadata list or a
    /// pair lacks its label or value.
    pub fn metadata(&self) -> Result<&Metadata> {
        cached(&self.metadata, || {
            let graph = self.resource.graph();
            let head = self.resource.value(sc::METADATA_LABELS)?;
            let pairs = rdf_list::decode_with(
                graph.as_ref(),
                &head,
                self.resource.list_limit(),
                |pair| {
                    let label = graph.value(&pair, rdf::LABEL)?;
                    let value = graph.value(&pair, rdf::VALUE)?;
                    Ok((label.to_string(), value.to_string()))
                },
            )?;
            Ok(pairs.into_iter().collect())
        })
    }

    /// The `description` (`dc:description`), if present.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn description(&self) -> Result<Option<String>> {
        self.resource.optional_string(DC_DESCRIPTION)
    }

    /// The `attribution` (`sc:attributionLabel`), if present.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn attribution(&self) -> Result<Option<String>> {
        self.resource.optional_string(sc::ATTRIBUTION_LABEL)
    }

    /// The `license` (`dcterms:rights`), if present.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn license(&self) -> Result<Option<String>> {
        self.resource.optional_string(DCTERMS_RIGHTS)
    }

    /// The `viewingHint` (`sc:viewingHint`), if present. Relative values are
    /// resolved against the document's base IRI.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn viewing_hint(&self) -> Result<Option<String>> {
        self.resource.optional_string(sc::VIEWING_HINT)
    }

    /// The `viewingDirection` (`sc:viewingDirection`), if present.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn viewing_direction(&self) -> Result<Option<String>> {
        self.resource.optional_string(sc::VIEWING_DIRECTION)
    }
}

impl Described for Manifest {
    fn resource(&self) -> &Resource {
        &self.resource
    }
}

/// Ordered label → value mapping.
///
/// Labels are not guaranteed unique in a manifest: a repeated label keeps the
/// position of its first occurrence and takes the value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Inserts or overwrites `label`.
    pub fn insert(&mut self, label: String, value: String) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    /// The value for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingMetadata`] if no entry has that label.
    pub fn get(&self, label: &str) -> Result<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| Error::MissingMetadata(label.to_owned()))
    }

    /// Returns true if an entry has `label`.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| l == label)
    }

    /// Iterates over `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut metadata = Metadata::default();
        for (label, value) in iter {
            metadata.insert(label, value);
        }
        metadata
    }
}
