//! `iiif-inspect` — Loads a IIIF Presentation 2.0 manifest and prints its
//! structure, or the JSON-LD snapshot of one resource in it.
//!
//! **Usage:**
//! ```
//! iiif-inspect <URI> [--resource <IRI>] [--max-list-length <N>] [--user-agent <UA>]
//! ```
//!
//! `<URI>` may be an `http(s)` URL, a `file://` URL, or a local path.
//! Logging is controlled by `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use iiif_presentation::{Described, FactoryConfig, Manifest, Node, ResourceFactory};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inspect a IIIF Presentation 2.0 manifest.
#[derive(Parser)]
#[command(name = "iiif-inspect", about = "Inspect a IIIF Presentation 2.0 manifest")]
struct Args {
    /// Manifest location: http(s) URL, file:// URL, or path.
    uri: String,

    /// Print the JSON-LD of this resource instead of the summary.
    #[arg(long)]
    resource: Option<String>,

    /// Maximum number of cells decoded from any one RDF list.
    #[arg(long)]
    max_list_length: Option<usize>,

    /// User-Agent sent when fetching over HTTP.
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = FactoryConfig::default();
    if let Some(max) = args.max_list_length {
        config.max_list_length = max;
    }
    if let Some(user_agent) = args.user_agent {
        config.user_agent = user_agent;
    }

    let manifest = ResourceFactory::with_config(config)
        .manifest(&args.uri)
        .with_context(|| format!("Failed to load manifest from {}", args.uri))?;
    info!(manifest = %manifest.identifier(), "manifest loaded");

    match args.resource {
        Some(iri) => print_resource(&manifest, &iri),
        None => print_summary(&manifest),
    }
}

fn print_resource(manifest: &Manifest, iri: &str) -> Result<()> {
    let resource = manifest.resource().child(Node::iri(iri));
    let json = resource
        .as_jsonld()
        .with_context(|| format!("Failed to export {iri}"))?;
    let text = serde_json::to_string_pretty(&json).context("Failed to serialize JSON-LD")?;
    println!("{text}");
    Ok(())
}

fn print_summary(manifest: &Manifest) -> Result<()> {
    let namespaces = manifest.resource().graph().namespaces();
    println!("Manifest: {}", manifest.identifier());
    if let Ok(type_iri) = manifest.type_iri() {
        println!("  Type: {}", namespaces.compact(&type_iri));
    }
    println!("  Label: {}", manifest.label().context("Manifest has no label")?);
    if let Some(description) = manifest.description()? {
        println!("  Description: {description}");
    }
    if let Some(attribution) = manifest.attribution()? {
        println!("  Attribution: {attribution}");
    }
    if let Some(license) = manifest.license()? {
        println!("  License: {license}");
    }

    match manifest.metadata() {
        Ok(metadata) => {
            println!("  Metadata ({} entries):", metadata.len());
            for (label, value) in metadata.iter() {
                println!("    {label:24} {value}");
            }
        }
        Err(e) if e.is_not_found() => println!("  Metadata: none"),
        Err(e) => return Err(e).context("Failed to decode metadata"),
    }

    let sequences = manifest.sequences().context("Failed to decode sequences")?;
    println!();
    for sequence in sequences {
        let canvases = sequence
            .canvases()
            .with_context(|| format!("Failed to decode canvases of {}", sequence.identifier()))?;
        println!("Sequence {} ({} canvases)", sequence.name(), canvases.len());
        for canvas in canvases {
            println!(
                "  Canvas {:40} {:>8} {:>6}x{:<6}",
                canvas.name(),
                canvas.label().unwrap_or_default(),
                canvas.width()?,
                canvas.height()?,
            );
            for image in canvas.images()? {
                println!("    Image {}", image.resource()?);
            }
        }
    }
    Ok(())
}
