//! A single page or view, with its dimensions and painted images.

use crate::annotation::Image;
use crate::error::Result;
use crate::namespaces::{exif, sc};
use crate::query::PathQuery;
use crate::resource::{Described, Resource};

/// An `sc:Canvas`.
#[derive(Debug, Clone)]
pub struct Canvas {
    resource: Resource,
}

impl Canvas {
    /// Wraps a canvas node.
    #[must_use]
    pub fn new(resource: Resource) -> Self {
        Canvas { resource }
    }

    /// The last path segment of the identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        self.resource.name()
    }

    /// Height in pixels (`exif:height`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if absent, or
    /// [`crate::Error::TypeCoercion`] if the value is not a positive integer.
    pub fn height(&self) -> Result<u32> {
        self.resource.positive_integer(exif::HEIGHT)
    }

    /// Width in pixels (`exif:width`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if absent, or
    /// [`crate::Error::TypeCoercion`] if the value is not a positive integer.
    pub fn width(&self) -> Result<u32> {
        self.resource.positive_integer(exif::WIDTH)
    }

    /// The image annotations painted onto this canvas.
    ///
    /// Found through `sc:hasImageAnnotations` rather than by annotation
    /// motivation; see [`PathQuery`]. A canvas without image annotations
    /// yields an empty vector. Not cached.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails.
    pub fn images(&self) -> Result<Vec<Image>> {
        let query = PathQuery::list_members(sc::HAS_IMAGE_ANNOTATIONS).select("image");
        Ok(query
            .items(self.resource.graph().as_ref(), self.resource.node())?
            .into_iter()
            .map(|node| Image::new(self.resource.child(node)))
            .collect())
    }
}

impl Described for Canvas {
    fn resource(&self) -> &Resource {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::error::Error;
    use crate::graph::ManifestGraph;
    use crate::node::Node;

    const CANVAS: &str = "https://example.org/m/canvas/p1";

    fn canvas(doc: &str) -> Canvas {
        let graph = Arc::new(ManifestGraph::from_jsonld(doc).expect("fixture parses"));
        Canvas::new(Resource::new(Node::iri(CANVAS), graph, 100))
    }

    #[test]
    fn dimensions() {
        let c = canvas(
            r#"{"@id": "https://example.org/m/canvas/p1",
                "http://www.w3.org/2003/12/exif/ns#height": 4700,
                "http://www.w3.org/2003/12/exif/ns#width": 3677}"#,
        );
        assert_eq!(c.height().expect("height"), 4700);
        assert_eq!(c.width().expect("width"), 3677);
        assert_eq!(c.name(), "p1");
    }

    #[test]
    fn non_numeric_height_is_type_error() {
        let c = canvas(
            r#"{"@id": "https://example.org/m/canvas/p1",
                "http://www.w3.org/2003/12/exif/ns#height": "tall"}"#,
        );
        assert!(matches!(c.height(), Err(Error::TypeCoercion { .. })));
        assert!(c.width().unwrap_err().is_not_found());
    }

    #[test]
    fn zero_width_is_type_error() {
        let c = canvas(
            r#"{"@id": "https://example.org/m/canvas/p1",
                "http://www.w3.org/2003/12/exif/ns#width": 0}"#,
        );
        assert!(matches!(c.width(), Err(Error::TypeCoercion { .. })));
    }

    #[test]
    fn images_follow_the_annotation_list() {
        let c = canvas(
            r#"{"@id": "https://example.org/m/canvas/p1",
                "http://iiif.io/api/presentation/2#hasImageAnnotations": {"@list": [
                    {"@id": "https://example.org/m/annotation/a1",
                     "http://www.w3.org/ns/oa#hasBody": {"@id": "https://images.example.org/a1/full/full/0/default.jpg"},
                     "http://www.w3.org/ns/oa#hasTarget": {"@id": "https://example.org/m/canvas/p1"}}
                ]}}"#,
        );
        let images = c.images().expect("images");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].target().expect("target"), *c.node());
        assert_eq!(
            images[0].resource().expect("resource"),
            "https://images.example.org/a1/full/full/0/default.jpg"
        );
    }

    #[test]
    fn no_image_list_means_no_images() {
        let c = canvas(r#"{"@id": "https://example.org/m/canvas/p1"}"#);
        assert!(c.images().expect("images").is_empty());
    }
}
