//! An ordered run of canvases within a manifest.

use std::sync::OnceLock;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::namespaces::sc;
use crate::rdf_list;
use crate::resource::{cached, Described, Resource};

/// An `sc:Sequence`: one viewing order over the manifest's canvases.
#[derive(Debug, Clone)]
pub struct Sequence {
    resource: Resource,
    canvases: OnceLock<Vec<Canvas>>,
}

impl Sequence {
    /// Wraps a sequence node.
    #[must_use]
    pub fn new(resource: Resource) -> Self {
        Sequence {
            resource,
            canvases: OnceLock::new(),
        }
    }

    /// The last path segment of the identifier (e.g., `normal`).
    #[must_use]
    pub fn name(&self) -> &str {
        self.resource.name()
    }

    /// The sequence's canvases, in viewing order.
    ///
    /// Decoded from the `sc:hasCanvases` list on first access and cached.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the sequence has no canvas list,
    /// or [`crate::Error::MalformedList`] if the list is not terminated.
    pub fn canvases(&self) -> Result<&[Canvas]> {
        cached(&self.canvases, || {
            let head = self.resource.value(sc::HAS_CANVASES)?;
            rdf_list::decode_with(
                self.resource.graph().as_ref(),
                &head,
                self.resource.list_limit(),
                |node| Ok(Canvas::new(self.resource.child(node))),
            )
        })
        .map(Vec::as_slice)
    }
}

impl Described for Sequence {
    fn resource(&self) -> &Resource {
        &self.resource
    }
}
