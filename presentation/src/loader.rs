//! Document retrieval and context inlining.
//!
//! Manifests reference their JSON-LD context by IRI. The parser never fetches
//! remote contexts itself: before parsing, every `@context` IRI in the
//! document is replaced by the context it names, taken from the embedded
//! copies of the IIIF Presentation 2.0 and Image 2.0 contexts or, for any
//! other IRI, fetched through a [`DocumentLoader`].

use std::collections::HashMap;
use std::path::PathBuf;

use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};

/// IRI of the IIIF Presentation API 2.0 context.
pub const PRESENTATION_2_CONTEXT: &str = "http://iiif.io/api/presentation/2/context.json";

/// IRI of the IIIF Image API 2.0 context, used by image service blocks.
pub const IMAGE_2_CONTEXT: &str = "http://iiif.io/api/image/2/context.json";

const PRESENTATION_2_DOCUMENT: &str = include_str!("../context/presentation-2.json");
const IMAGE_2_DOCUMENT: &str = include_str!("../context/image-2.json");

/// Remote contexts nested deeper than this are rejected.
const MAX_CONTEXT_DEPTH: usize = 8;

/// Retrieves a document by URI.
pub trait DocumentLoader {
    /// Returns the document body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] or [`Error::Io`] if the document cannot be
    /// retrieved.
    fn load(&self, uri: &str) -> Result<String>;
}

/// Blocking HTTP(S) loader. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    user_agent: String,
}

impl HttpLoader {
    /// Creates a loader that identifies itself as `user_agent`.
    pub fn new(user_agent: impl Into<String>) -> Self {
        HttpLoader {
            user_agent: user_agent.into(),
        }
    }
}

impl DocumentLoader for HttpLoader {
    fn load(&self, uri: &str) -> Result<String> {
        let fetch_error = |source| Error::Fetch {
            uri: uri.to_owned(),
            source,
        };
        info!(uri, "fetching document");
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(fetch_error)?;
        let response = client
            .get(uri)
            .header(ACCEPT, "application/ld+json, application/json")
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(fetch_error)?;
        let body = response.text().map_err(fetch_error)?;
        debug!(uri, bytes = body.len(), "fetched document");
        Ok(body)
    }
}

/// Reads documents from the local filesystem. Accepts `file://` URIs and
/// plain paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl FileLoader {
    fn path(uri: &str) -> PathBuf {
        Url::parse(uri)
            .ok()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
            .unwrap_or_else(|| PathBuf::from(uri))
    }
}

impl DocumentLoader for FileLoader {
    fn load(&self, uri: &str) -> Result<String> {
        let path = Self::path(uri);
        debug!(path = %path.display(), "reading document");
        std::fs::read_to_string(&path).map_err(|source| Error::Io { path, source })
    }
}

/// Returns the loader for `uri`: HTTP for `http`/`https`, files otherwise.
#[must_use]
pub fn loader_for(uri: &str, user_agent: &str) -> Box<dyn DocumentLoader> {
    match Url::parse(uri).map(|url| url.scheme().to_owned()) {
        Ok(scheme) if scheme == "http" || scheme == "https" => {
            Box::new(HttpLoader::new(user_agent))
        }
        _ => Box::new(FileLoader),
    }
}

/// The base IRI for a document loaded from `uri`: the URI itself when it is
/// absolute, otherwise the `file://` URL of the path.
#[must_use]
pub fn base_iri(uri: &str) -> Option<String> {
    match Url::parse(uri) {
        Ok(url) => Some(url.into()),
        Err(_) => std::path::absolute(uri)
            .ok()
            .and_then(|path| Url::from_file_path(path).ok())
            .map(String::from),
    }
}

/// Resolves context IRIs to context definitions.
///
/// The two IIIF contexts are always available offline; other IRIs are
/// fetched through the fallback loader once and then cached.
pub struct ContextResolver<'a> {
    fallback: Option<&'a dyn DocumentLoader>,
    cache: HashMap<String, Value>,
}

impl<'a> ContextResolver<'a> {
    /// A resolver that only knows the embedded IIIF contexts.
    #[must_use]
    pub fn offline() -> Self {
        ContextResolver {
            fallback: None,
            cache: HashMap::new(),
        }
    }

    /// A resolver that fetches unknown contexts through `loader`.
    #[must_use]
    pub fn with_loader(loader: &'a dyn DocumentLoader) -> Self {
        ContextResolver {
            fallback: Some(loader),
            cache: HashMap::new(),
        }
    }

    /// The context definition named by `iri` (the value of the context
    /// document's own `@context` key).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for an unknown IRI with no fallback loader,
    /// or the loader's error.
    pub fn resolve(&mut self, iri: &str) -> Result<Value> {
        if let Some(context) = self.cache.get(iri) {
            return Ok(context.clone());
        }
        let document = match iri {
            PRESENTATION_2_CONTEXT => PRESENTATION_2_DOCUMENT.to_owned(),
            IMAGE_2_CONTEXT => IMAGE_2_DOCUMENT.to_owned(),
            _ => match self.fallback {
                Some(loader) => loader.load(iri)?,
                None => {
                    return Err(Error::Parse(format!(
                        "remote context {iri} is not available offline"
                    )))
                }
            },
        };
        let mut parsed: Value = serde_json::from_str(&document)?;
        let context = parsed
            .get_mut("@context")
            .map(Value::take)
            .ok_or_else(|| Error::Parse(format!("context document {iri} has no @context")))?;
        self.cache.insert(iri.to_owned(), context.clone());
        Ok(context)
    }
}

/// Parses `document` and replaces every remote `@context` reference with its
/// definition. If the top-level object carries no `@context`, `default_context`
/// is applied to it.
///
/// # Errors
///
/// Returns [`Error::Json`] for invalid JSON and any error from `resolver`.
pub fn inline_context(
    document: &str,
    default_context: &str,
    resolver: &mut ContextResolver<'_>,
) -> Result<String> {
    let mut value: Value = serde_json::from_str(document)?;
    inline_context_in(&mut value, default_context, resolver)?;
    Ok(value.to_string())
}

/// In-place form of [`inline_context`] for an already parsed document.
///
/// # Errors
///
/// Returns any error from `resolver`.
pub fn inline_context_in(
    value: &mut Value,
    default_context: &str,
    resolver: &mut ContextResolver<'_>,
) -> Result<()> {
    if let Value::Object(map) = value {
        if !map.contains_key("@context") {
            debug!(context = default_context, "applying default context");
            map.insert("@context".to_owned(), Value::String(default_context.to_owned()));
        }
    }
    inline_value(value, resolver, 0)
}

fn inline_value(value: &mut Value, resolver: &mut ContextResolver<'_>, depth: usize) -> Result<()> {
    match value {
        Value::Object(map) => {
            if let Some(context) = map.get_mut("@context") {
                inline_context_value(context, resolver, depth)?;
            }
            for (key, child) in map.iter_mut() {
                if key != "@context" {
                    inline_value(child, resolver, depth)?;
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                inline_value(item, resolver, depth)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Rewrites one `@context` value in place. Arrays are flattened because a
/// context array may not contain another array.
fn inline_context_value(
    context: &mut Value,
    resolver: &mut ContextResolver<'_>,
    depth: usize,
) -> Result<()> {
    if depth >= MAX_CONTEXT_DEPTH {
        return Err(Error::Parse("remote contexts nested too deeply".to_owned()));
    }
    match context {
        Value::String(iri) => {
            let mut resolved = resolver.resolve(iri)?;
            inline_context_value(&mut resolved, resolver, depth + 1)?;
            *context = resolved;
        }
        Value::Array(entries) => {
            let mut flattened = Vec::with_capacity(entries.len());
            for mut entry in std::mem::take(entries) {
                inline_context_value(&mut entry, resolver, depth)?;
                match entry {
                    Value::Array(inner) => flattened.extend(inner),
                    other => flattened.push(other),
                }
            }
            *entries = flattened;
        }
        Value::Object(definition) => {
            // Scoped contexts inside term definitions.
            for term in definition.values_mut() {
                if let Some(scoped) = term.get_mut("@context") {
                    inline_context_value(scoped, resolver, depth)?;
                }
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct FixedLoader(&'static str);

    impl DocumentLoader for FixedLoader {
        fn load(&self, _uri: &str) -> Result<String> {
            Ok(self.0.to_owned())
        }
    }

    #[test]
    fn embedded_contexts_resolve_offline() {
        let mut resolver = ContextResolver::offline();
        let context = resolver.resolve(PRESENTATION_2_CONTEXT).expect("embedded");
        assert_eq!(context["sc"], "http://iiif.io/api/presentation/2#");
        assert_eq!(context["sequences"]["@container"], "@list");
        assert!(resolver.resolve(IMAGE_2_CONTEXT).is_ok());
        assert!(matches!(
            resolver.resolve("http://example.org/context.json"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn unknown_contexts_go_through_the_loader() {
        let loader = FixedLoader(r#"{"@context": {"name": "http://xmlns.com/foaf/0.1/name"}}"#);
        let mut resolver = ContextResolver::with_loader(&loader);
        let context = resolver.resolve("http://example.org/context.json").expect("fetched");
        assert_eq!(context["name"], "http://xmlns.com/foaf/0.1/name");
    }

    #[test]
    fn inlines_nested_and_default_contexts() {
        let doc = r#"{
            "@id": "https://example.org/m",
            "service": {"@context": "http://iiif.io/api/image/2/context.json", "@id": "https://example.org/svc"}
        }"#;
        let mut resolver = ContextResolver::offline();
        let inlined = inline_context(doc, PRESENTATION_2_CONTEXT, &mut resolver).expect("inlines");
        let value: Value = serde_json::from_str(&inlined).expect("json");
        assert!(value["@context"].is_object());
        assert!(value["service"]["@context"].is_object());
        assert_eq!(value["service"]["@context"]["protocol"]["@id"], "dcterms:conformsTo");
    }

    #[test]
    fn context_arrays_are_flattened() {
        let doc = r#"{"@context": ["http://iiif.io/api/presentation/2/context.json", {"ex": "http://example.org/"}]}"#;
        let mut resolver = ContextResolver::offline();
        let inlined = inline_context(doc, PRESENTATION_2_CONTEXT, &mut resolver).expect("inlines");
        let value: Value = serde_json::from_str(&inlined).expect("json");
        let entries = value["@context"].as_array().expect("array");
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(Value::is_object));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let mut resolver = ContextResolver::offline();
        assert!(matches!(
            inline_context("{not json", PRESENTATION_2_CONTEXT, &mut resolver),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn base_iri_of_urls_and_paths() {
        assert_eq!(
            base_iri("https://example.org/iiif/manifest").as_deref(),
            Some("https://example.org/iiif/manifest")
        );
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("manifest.json");
        let expected = Url::from_file_path(&path).expect("file url");
        assert_eq!(
            base_iri(&path.to_string_lossy()).as_deref(),
            Some(expected.as_str())
        );
    }

    #[test]
    fn file_loader_accepts_paths_and_file_uris() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{}}").expect("write");
        let path = file.path().to_path_buf();
        assert_eq!(FileLoader.load(&path.to_string_lossy()).expect("path"), "{}");
        let uri = Url::from_file_path(&path).expect("file url");
        assert_eq!(FileLoader.load(uri.as_str()).expect("uri"), "{}");
        assert!(matches!(
            FileLoader.load("/definitely/not/here.json"),
            Err(Error::Io { .. })
        ));
    }
}
