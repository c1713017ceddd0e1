//! Canvas-level behaviour against the figgy fixture.

mod common;

use iiif_presentation::namespaces::sc;
use iiif_presentation::{Described, ResourceFactory};

use common::{a_canvas, a_manifest, FIRST_IMAGE};

#[test]
fn id_is_dereferenceable() {
    let canvas = a_canvas(&a_manifest());
    let url = canvas.parsed_identifier().unwrap();
    assert!(["http", "https"].contains(&url.scheme()));
}

#[test]
fn label() {
    assert_eq!(a_canvas(&a_manifest()).label().unwrap(), "1");
}

#[test]
fn name() {
    let canvas = a_canvas(&a_manifest());
    assert_eq!(canvas.name(), "2ae6db12-575c-4708-a8a9-8b8408c171b7");
    assert_eq!(canvas.identifier().rsplit('/').next(), Some(canvas.name()));
}

#[test]
fn height() {
    assert_eq!(a_canvas(&a_manifest()).height().unwrap(), 4700);
}

#[test]
fn width() {
    assert_eq!(a_canvas(&a_manifest()).width().unwrap(), 3677);
}

#[test]
fn type_is_canvas() {
    assert_eq!(a_canvas(&a_manifest()).type_iri().unwrap(), sc::CANVAS);
}

#[test]
fn images() {
    let canvas = a_canvas(&a_manifest());
    let images = canvas.images().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].resource().unwrap(), FIRST_IMAGE);
}

#[test]
fn canvases_keep_document_order() {
    let manifest = a_manifest();
    let canvases = manifest.sequences().unwrap()[0].canvases().unwrap();
    let labels: Vec<_> = canvases.iter().map(|c| c.label().unwrap()).collect();
    assert_eq!(labels, ["1", "2"]);
    for canvas in canvases {
        assert!(canvas.parsed_identifier().is_ok());
        assert_eq!(canvas.images().unwrap().len(), 1);
    }
}

#[test]
fn canvas_without_images() {
    let doc = r#"{
        "@context": "http://iiif.io/api/presentation/2/context.json",
        "@id": "https://example.org/m", "@type": "sc:Manifest",
        "sequences": [{"@id": "https://example.org/m/sequence/normal", "@type": "sc:Sequence",
            "canvases": [{"@id": "https://example.org/m/canvas/blank", "@type": "sc:Canvas",
                          "label": "blank", "height": 10, "width": 20}]}]
    }"#;
    let manifest = ResourceFactory::new().manifest_from_str(doc).unwrap();
    let canvas = &manifest.sequences().unwrap()[0].canvases().unwrap()[0];
    assert!(canvas.images().unwrap().is_empty());
    assert_eq!(canvas.name(), "blank");
}
