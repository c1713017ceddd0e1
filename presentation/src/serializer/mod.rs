//! Serializers for single resources.
//!
//! - **JSON-LD** ([`jsonld`]): a detached, expanded-form snapshot of one node's
//!   own triples, returned by [`crate::Described::as_jsonld`].

pub mod jsonld;
