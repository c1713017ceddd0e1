//! Annotations linking content to a canvas.

use crate::error::Result;
use crate::graph::GraphStore;
use crate::namespaces::oa;
use crate::node::Node;
use crate::resource::{Described, Resource};

/// An `oa:Annotation`: a body (the painted content) on a target (a canvas).
#[derive(Debug, Clone)]
pub struct Annotation {
    resource: Resource,
}

/// An image annotation. Structurally identical to [`Annotation`].
pub type Image = Annotation;

impl Annotation {
    /// Wraps an annotation node.
    #[must_use]
    pub fn new(resource: Resource) -> Self {
        Annotation { resource }
    }

    /// The painted content (`oa:hasBody`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the annotation has no body.
    pub fn body(&self) -> Result<Node> {
        self.resource.value(oa::HAS_BODY)
    }

    /// The annotated canvas (`oa:hasTarget`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the annotation has no target.
    pub fn target(&self) -> Result<Node> {
        self.resource.value(oa::HAS_TARGET)
    }

    /// The body stringified; for images, the image URL.
    ///
    /// This inherent method shadows [`Described::resource`] under method-call
    /// syntax: `image.resource()` is the URL string, while the underlying
    /// record is reached with `Described::resource(&image)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the annotation has no body.
    pub fn resource(&self) -> Result<String> {
        Ok(self.body()?.to_string())
    }

    /// The motivation (`oa:motivatedBy`), usually `sc:painting` for images.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn motivation(&self) -> Result<Option<Node>> {
        self.resource
            .graph()
            .optional_value(self.resource.node(), oa::MOTIVATED_BY)
    }
}

impl Described for Annotation {
    fn resource(&self) -> &Resource {
        &self.resource
    }
}
