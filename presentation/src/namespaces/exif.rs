//! `exif:` namespace — canvas and image dimensions.

use super::Namespace;

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2003/12/exif/ns#";

/// `exif:height` (JSON key `height`, typed `xsd:integer`).
pub const HEIGHT: &str = "http://www.w3.org/2003/12/exif/ns#height";
/// `exif:width` (JSON key `width`, typed `xsd:integer`).
pub const WIDTH: &str = "http://www.w3.org/2003/12/exif/ns#width";

/// Returns the `exif:` namespace binding.
#[must_use]
pub fn namespace() -> Namespace {
    Namespace {
        prefix: "exif",
        iri: NS,
        label: "EXIF vocabulary",
    }
}
