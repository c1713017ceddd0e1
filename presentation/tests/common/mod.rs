//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use iiif_presentation::{Canvas, Manifest, ResourceFactory};

/// Identifier of the fixture manifest.
pub const MANIFEST_ID: &str =
    "https://figgy.princeton.edu/concern/scanned_resources/a3b5a622-8608-4a05-91cb-bc3840a44ef9/manifest";

/// Image URL painted on the first canvas.
pub const FIRST_IMAGE: &str = "https://iiif-cloud.princeton.edu/iiif/2/33%2F4f%2F82%2F334f828b1c7f44ecb18c7c0d55fec740%2Fintermediate_file/full/1000,/0/default.jpg";

/// Path of the checked-in copy of the figgy manifest.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/figgy-a3b5a622.json")
}

/// Loads the fixture through the file loader.
pub fn a_manifest() -> Manifest {
    ResourceFactory::new()
        .manifest(&fixture_path().to_string_lossy())
        .expect("fixture manifest loads")
}

/// The first canvas of the first sequence.
pub fn a_canvas(manifest: &Manifest) -> Canvas {
    manifest.sequences().expect("sequences")[0]
        .canvases()
        .expect("canvases")[0]
        .clone()
}
