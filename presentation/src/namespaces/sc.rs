//! `sc:` namespace — IIIF Presentation API 2.0 vocabulary.
//!
//! Types for the structural resources (`Manifest`, `Sequence`, `Canvas`) and
//! the list-valued properties that link them. Every `has*` property below is
//! declared `@container: @list` in the Presentation 2.0 context, so its object
//! is the head of an RDF list.

use super::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://iiif.io/api/presentation/2#";

/// `sc:Manifest`.
pub const MANIFEST: &str = "http://iiif.io/api/presentation/2#Manifest";
/// `sc:Sequence`.
pub const SEQUENCE: &str = "http://iiif.io/api/presentation/2#Sequence";
/// `sc:Canvas`.
pub const CANVAS: &str = "http://iiif.io/api/presentation/2#Canvas";
/// `sc:hasSequences` (JSON key `sequences`).
pub const HAS_SEQUENCES: &str = "http://iiif.io/api/presentation/2#hasSequences";
/// `sc:hasCanvases` (JSON key `canvases`).
pub const HAS_CANVASES: &str = "http://iiif.io/api/presentation/2#hasCanvases";
/// `sc:hasImageAnnotations` (JSON key `images`).
pub const HAS_IMAGE_ANNOTATIONS: &str = "http://iiif.io/api/presentation/2#hasImageAnnotations";
/// `sc:metadataLabels` (JSON key `metadata`).
pub const METADATA_LABELS: &str = "http://iiif.io/api/presentation/2#metadataLabels";
/// `sc:attributionLabel` (JSON key `attribution`).
pub const ATTRIBUTION_LABEL: &str = "http://iiif.io/api/presentation/2#attributionLabel";
/// `sc:viewingHint` (JSON key `viewingHint`), an IRI value.
pub const VIEWING_HINT: &str = "http://iiif.io/api/presentation/2#viewingHint";
/// `sc:viewingDirection` (JSON key `viewingDirection`), an IRI value.
pub const VIEWING_DIRECTION: &str = "http://iiif.io/api/presentation/2#viewingDirection";
/// `sc:painting` motivation.
pub const PAINTING: &str = "http://iiif.io/api/presentation/2#painting";

/// Returns the `sc:` namespace binding.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "sc",
        iri: NS,
        label: "IIIF Presentation API 2.0",
    }
}
