//! The fixed vocabulary table bound into every manifest graph.
//!
//! Lookups always match on full IRIs; prefixes only matter for display
//! ([`Namespaces::compact`]) and for reading CURIEs ([`Namespaces::expand`]).
//! A manifest that binds different prefixes to the same IRIs resolves the same.

pub mod exif;
pub mod oa;
pub mod rdf;
pub mod sc;

/// A prefix → IRI binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// The prefix (e.g., `"sc"`).
    pub prefix: &'static str,
    /// The full namespace IRI (e.g., `"http://iiif.io/api/presentation/2#"`).
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// `dc:` namespace IRI.
pub const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
/// `dcterms:` namespace IRI.
pub const NS_DCTERMS: &str = "http://purl.org/dc/terms/";
/// `dc:description` (JSON key `description`).
pub const DC_DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
/// `dcterms:rights` (JSON key `license`).
pub const DCTERMS_RIGHTS: &str = "http://purl.org/dc/terms/rights";

/// The namespace table, in binding order.
#[derive(Debug, Clone)]
pub struct Namespaces {
    bindings: Vec<Namespace>,
}

impl Namespaces {
    /// Returns the standard IIIF Presentation 2.0 binding table.
    ///
    /// Binding order: `sc, iiif, exif, oa, cnt, dc, dcterms, dctypes, doap,
    /// foaf, rdf, rdfs, xsd, svcs, as`.
    #[must_use]
    pub fn standard() -> &'static Namespaces {
        static TABLE: std::sync::OnceLock<Namespaces> = std::sync::OnceLock::new();
        TABLE.get_or_init(|| Namespaces {
            bindings: vec![
                sc::namespace(),
                other("iiif", "http://iiif.io/api/image/2#", "IIIF Image API 2.0"),
                exif::namespace(),
                oa::namespace(),
                other("cnt", "http://www.w3.org/2011/content#", "Content in RDF"),
                other("dc", NS_DC, "Dublin Core elements"),
                other("dcterms", NS_DCTERMS, "Dublin Core terms"),
                other("dctypes", "http://purl.org/dc/dcmitype/", "DCMI types"),
                other("doap", "http://usefulinc.com/ns/doap#", "Description of a Project"),
                other("foaf", "http://xmlns.com/foaf/0.1/", "Friend of a Friend"),
                rdf::namespace(),
                rdf::rdfs_namespace(),
                rdf::xsd_namespace(),
                other("svcs", "http://rdfs.org/sioc/services#", "SIOC services"),
                other("as", "http://www.w3.org/ns/activitystreams#", "Activity Streams"),
            ],
        })
    }

    /// Iterates over the bindings in order.
    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.bindings.iter()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the table has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Looks up the namespace IRI bound to `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|ns| ns.prefix == prefix)
            .map(|ns| ns.iri)
    }

    /// Expands a CURIE such as `sc:Manifest` into a full IRI.
    /// Returns `None` if the prefix is unbound or `curie` has no colon.
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = curie.split_once(':')?;
        self.get(prefix).map(|ns| format!("{ns}{local}"))
    }

    /// Shortens a full IRI to `prefix:local` using the longest matching
    /// namespace. IRIs outside the table are returned unchanged.
    #[must_use]
    pub fn compact(&self, iri: &str) -> String {
        self.bindings
            .iter()
            .filter(|ns| iri.starts_with(ns.iri))
            .max_by_key(|ns| ns.iri.len())
            .map_or_else(
                || iri.to_owned(),
                |ns| format!("{}:{}", ns.prefix, &iri[ns.iri.len()..]),
            )
    }
}

fn other(prefix: &'static str, iri: &'static str, label: &'static str) -> Namespace {
    Namespace { prefix, iri, label }
}
