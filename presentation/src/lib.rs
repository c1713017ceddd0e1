//! IIIF Presentation API 2.0 manifests as typed views over an RDF graph.
//!
//! A manifest document is parsed once into an immutable graph. The typed
//! resources ([`Manifest`] → [`Sequence`] → [`Canvas`] → [`Image`]) are thin
//! projections of graph nodes: each property is looked up on access, list
//! valued properties are decoded from `rdf:first`/`rdf:rest` chains, and the
//! derived collections (`sequences`, `canvases`, `metadata`) are cached per
//! instance.
//!
//! # Entry Point
//!
//! ```no_run
//! use iiif_presentation::{Described, ResourceFactory};
//!
//! let manifest = ResourceFactory::new().manifest(
//!     "https://figgy.princeton.edu/concern/scanned_resources/a3b5a622-8608-4a05-91cb-bc3840a44ef9/manifest",
//! )?;
//! println!("{}", manifest.label()?);
//! for sequence in manifest.sequences()? {
//!     for canvas in sequence.canvases()? {
//!         println!("{} {}x{}", canvas.name(), canvas.width()?, canvas.height()?);
//!         for image in canvas.images()? {
//!             println!("  {}", image.resource()?);
//!         }
//!     }
//! }
//! # Ok::<(), iiif_presentation::Error>(())
//! ```
//!
//! # Threading
//!
//! The graph is shared through [`std::sync::Arc`] and never mutated. Caches
//! are [`std::sync::OnceLock`]s: concurrent first access on one instance may
//! compute twice, but only one value is kept and every caller sees it.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod annotation;
pub mod canvas;
pub mod error;
pub mod factory;
pub mod graph;
pub mod loader;
pub mod manifest;
pub mod namespaces;
pub mod node;
pub mod query;
pub mod rdf_list;
pub mod resource;
pub mod sequence;
pub mod serializer;

pub use annotation::{Annotation, Image};
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use factory::{FactoryConfig, ResourceFactory};
pub use graph::{GraphStore, ManifestGraph};
pub use manifest::{Manifest, Metadata};
pub use node::{Literal, Node};
pub use resource::{Described, Resource};
pub use sequence::Sequence;
