//! Entry point: load a manifest document and wrap its root node.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::error::Result;
use crate::graph::{GraphStore, ManifestGraph};
use crate::loader::{self, ContextResolver, DocumentLoader, PRESENTATION_2_CONTEXT};
use crate::manifest::Manifest;
use crate::namespaces::{rdf, sc};
use crate::node::Node;
use crate::rdf_list::DEFAULT_MAX_LIST_LENGTH;
use crate::resource::Resource;

/// Factory settings. Every field has a default; see [`FactoryConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Context applied to documents that carry no `@context` of their own.
    pub context_iri: String,
    /// Maximum number of cells decoded from any one RDF list.
    pub max_list_length: usize,
    /// `User-Agent` sent with HTTP requests.
    pub user_agent: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig {
            context_iri: PRESENTATION_2_CONTEXT.to_owned(),
            max_list_length: DEFAULT_MAX_LIST_LENGTH,
            user_agent: concat!("iiif-presentation/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Builds [`Manifest`]s from IIIF Presentation 2.0 documents.
///
/// Each call parses its document into a fresh graph; the returned manifest
/// and everything reached through it share that graph.
#[derive(Debug, Clone, Default)]
pub struct ResourceFactory {
    config: FactoryConfig,
}

impl ResourceFactory {
    /// A factory with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory with `config`.
    #[must_use]
    pub fn with_config(config: FactoryConfig) -> Self {
        ResourceFactory { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Loads the manifest at `uri`: `http(s)` URIs are fetched, `file://`
    /// URIs and plain paths are read from disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Fetch`] or [`crate::Error::Io`] if the document
    /// cannot be retrieved, [`crate::Error::Json`] or [`crate::Error::Parse`]
    /// if it is not valid JSON-LD, and [`crate::Error::NotFound`] if it
    /// describes no `sc:Manifest`.
    pub fn manifest(&self, uri: &str) -> Result<Manifest> {
        let loader = loader::loader_for(uri, &self.config.user_agent);
        self.manifest_with(loader.as_ref(), uri)
    }

    /// Loads the manifest at `uri` through `loader`. Unknown remote contexts
    /// are fetched through the same loader.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceFactory::manifest`].
    pub fn manifest_with(&self, loader: &dyn DocumentLoader, uri: &str) -> Result<Manifest> {
        let document = loader.load(uri)?;
        info!(uri, bytes = document.len(), "loaded manifest document");
        let base = loader::base_iri(uri);
        self.parse(&document, base, ContextResolver::with_loader(loader))
    }

    /// Builds a manifest from an already retrieved document. Only the
    /// embedded IIIF contexts are available.
    ///
    /// Relative IRIs resolve against the document's top-level `@id` when it
    /// is absolute.
    ///
    /// # Errors
    ///
    /// Same as [`ResourceFactory::manifest`], minus retrieval errors.
    pub fn manifest_from_str(&self, document: &str) -> Result<Manifest> {
        self.parse(document, None, ContextResolver::offline())
    }

    fn parse(
        &self,
        document: &str,
        base: Option<String>,
        mut resolver: ContextResolver<'_>,
    ) -> Result<Manifest> {
        let mut value: Value = serde_json::from_str(document)?;
        let base = base.or_else(|| document_id(&value));
        loader::inline_context_in(&mut value, &self.config.context_iri, &mut resolver)?;
        let graph = ManifestGraph::from_jsonld_with_base(&value.to_string(), base.as_deref())?;
        let root = graph.subject(rdf::TYPE, &Node::iri(sc::MANIFEST))?;
        debug!(manifest = %root, triples = graph.len(), "located manifest node");
        Ok(Manifest::new(Resource::new(
            root,
            Arc::new(graph),
            self.config.max_list_length,
        )))
    }
}

/// The top-level `@id`, if it is an absolute URL.
fn document_id(document: &Value) -> Option<String> {
    document
        .get("@id")
        .and_then(Value::as_str)
        .filter(|id| Url::parse(id).is_ok())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::resource::Described;

    #[test]
    fn default_config() {
        let config = FactoryConfig::default();
        assert_eq!(config.context_iri, PRESENTATION_2_CONTEXT);
        assert_eq!(config.max_list_length, DEFAULT_MAX_LIST_LENGTH);
        assert!(config.user_agent.starts_with("iiif-presentation/"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: FactoryConfig =
            serde_json::from_str(r#"{"max_list_length": 10}"#).expect("config");
        assert_eq!(config.max_list_length, 10);
        assert_eq!(config.context_iri, PRESENTATION_2_CONTEXT);
    }

    #[test]
    fn document_without_context_gets_the_presentation_context() {
        let doc = r#"{"@id": "https://example.org/m", "@type": "sc:Manifest", "label": "Bare"}"#;
        let manifest = ResourceFactory::new().manifest_from_str(doc).expect("manifest");
        assert_eq!(manifest.identifier(), "https://example.org/m");
        assert_eq!(manifest.label().expect("label"), "Bare");
    }

    #[test]
    fn document_without_manifest_is_not_found() {
        let doc = r#"{"@context": "http://iiif.io/api/presentation/2/context.json",
                      "@id": "https://example.org/c", "@type": "sc:Canvas"}"#;
        let err = ResourceFactory::new().manifest_from_str(doc).unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
    }

    #[test]
    fn relative_iris_resolve_against_the_document_id() {
        let doc = r#"{"@context": "http://iiif.io/api/presentation/2/context.json",
                      "@id": "https://example.org/iiif/m/manifest", "@type": "sc:Manifest",
                      "viewingHint": "individuals"}"#;
        let manifest = ResourceFactory::new().manifest_from_str(doc).expect("manifest");
        assert_eq!(
            manifest.viewing_hint().expect("lookup").as_deref(),
            Some("https://example.org/iiif/m/individuals")
        );
        let json = manifest.as_jsonld().expect("json-ld");
        assert_eq!(
            json[0][crate::namespaces::sc::VIEWING_HINT][0]["@id"],
            "https://example.org/iiif/m/individuals"
        );
    }

    #[test]
    fn list_bound_comes_from_config() {
        let doc = r#"{"@context": "http://iiif.io/api/presentation/2/context.json",
                      "@id": "https://example.org/m", "@type": "sc:Manifest",
                      "sequences": [{"@id": "https://example.org/s1"}, {"@id": "https://example.org/s2"}]}"#;
        let factory = ResourceFactory::with_config(FactoryConfig {
            max_list_length: 1,
            ..FactoryConfig::default()
        });
        let manifest = factory.manifest_from_str(doc).expect("manifest");
        assert!(matches!(
            manifest.sequences(),
            Err(Error::MalformedList { hops: 1, .. })
        ));
    }
}
