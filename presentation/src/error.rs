//! Error taxonomy for graph resolution and manifest loading.
//!
//! Nothing is recovered locally: every failure surfaces to the caller of the
//! accessor or factory method that triggered the lazy computation.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while loading, parsing, or navigating a manifest graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An expected property is absent on a node.
    #[error("no value for <{predicate}> on {subject}")]
    NotFound {
        /// The node that was queried.
        subject: String,
        /// Full IRI of the missing property.
        predicate: String,
    },

    /// An RDF list never reached `rdf:nil` (missing terminator or cycle).
    #[error("RDF list starting at {head} is not terminated by rdf:nil after {hops} hops")]
    MalformedList {
        /// The list head passed to the decoder.
        head: String,
        /// Number of `rdf:rest` hops taken before giving up.
        hops: usize,
    },

    /// A literal expected to be a positive integer could not be parsed as one.
    #[error("value {lexical:?} of <{predicate}> on {subject} is not a positive integer")]
    TypeCoercion {
        /// The node that was queried.
        subject: String,
        /// Full IRI of the property.
        predicate: String,
        /// The offending lexical form.
        lexical: String,
    },

    /// A resource identifier is not a dereferenceable http(s) URI.
    #[error("identifier {identifier:?} is not an http(s) URI: {reason}")]
    InvalidIdentifier {
        /// The identifier as read from the graph.
        identifier: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A metadata label is not present on the manifest.
    #[error("no metadata entry labelled {0:?}")]
    MissingMetadata(String),

    /// The manifest document could not be retrieved over HTTP.
    #[error("failed to fetch {uri}")]
    Fetch {
        /// The requested URI.
        uri: String,
        /// Underlying transport or status error.
        #[source]
        source: reqwest::Error,
    },

    /// A local manifest document could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("manifest document is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// The document is not valid JSON-LD, or cannot be converted to RDF.
    #[error("failed to parse JSON-LD: {0}")]
    Parse(String),

    /// The underlying triple store reported an error.
    #[error("graph store error: {0}")]
    Graph(String),
}

impl Error {
    pub(crate) fn not_found(subject: &impl std::fmt::Display, predicate: &str) -> Self {
        Error::NotFound {
            subject: subject.to_string(),
            predicate: predicate.to_owned(),
        }
    }

    /// Returns true for [`Error::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
