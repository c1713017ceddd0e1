//! `oa:` namespace — Open Annotation.
//!
//! Images are attached to canvases as annotations: the body is the painted
//! content, the target is the canvas.

use super::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/ns/oa#";

/// `oa:Annotation`.
pub const ANNOTATION: &str = "http://www.w3.org/ns/oa#Annotation";
/// `oa:hasBody` (JSON key `resource`).
pub const HAS_BODY: &str = "http://www.w3.org/ns/oa#hasBody";
/// `oa:hasTarget` (JSON key `on`).
pub const HAS_TARGET: &str = "http://www.w3.org/ns/oa#hasTarget";
/// `oa:motivatedBy` (JSON key `motivation`).
pub const MOTIVATED_BY: &str = "http://www.w3.org/ns/oa#motivatedBy";

/// Returns the `oa:` namespace binding.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "oa",
        iri: NS,
        label: "Open Annotation",
    }
}
