//! Image annotations against the figgy fixture.

mod common;

use iiif_presentation::namespaces::{oa, sc};
use iiif_presentation::{Described, Node};

use common::{a_canvas, a_manifest, FIRST_IMAGE};

#[test]
fn body() {
    let canvas = a_canvas(&a_manifest());
    let annotation = &canvas.images().unwrap()[0];
    assert_eq!(annotation.body().unwrap(), Node::iri(FIRST_IMAGE));
}

#[test]
fn target() {
    let canvas = a_canvas(&a_manifest());
    let annotation = &canvas.images().unwrap()[0];
    assert_eq!(&annotation.target().unwrap(), canvas.node());
}

#[test]
fn motivation_and_type() {
    let canvas = a_canvas(&a_manifest());
    let annotation = &canvas.images().unwrap()[0];
    assert_eq!(annotation.motivation().unwrap(), Some(Node::iri(sc::PAINTING)));
    assert_eq!(annotation.type_iri().unwrap(), oa::ANNOTATION);
}
