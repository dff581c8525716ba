//! `aspect-fields` — Resolves an Aspect Model into UI field descriptors.
//!
//! Loads a JSON rendered Aspect Model, resolves every property (or the
//! properties of one entity, or a named subset) into field descriptor trees
//! and writes them as JSON.
//!
//! **Usage:**
//! ```
//! aspect-fields <MODEL> [--entity <name>] [--property <name>]... [--out <path>] [--compact]
//! ```
//!
//! Diagnostics go to stderr and are filtered through `RUST_LOG`
//! (e.g. `RUST_LOG=aspect_codegen=debug` shows dropped constraints).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use aspect_codegen::{resolve_field, FieldDescriptor, ResolutionReport};
use aspect_model::{Aspect, Property};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resolve an Aspect Model into UI field descriptors.
#[derive(Parser)]
#[command(
    name = "aspect-fields",
    about = "Resolve Aspect Model properties into UI field descriptors"
)]
struct Args {
    /// Aspect Model in JSON form.
    model: PathBuf,

    /// Resolve the properties of this entity instead of the aspect's.
    #[arg(long)]
    entity: Option<String>,

    /// Resolve only these properties (repeatable).
    #[arg(long = "property")]
    properties: Vec<String>,

    /// Output file. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write compact instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let aspect = Aspect::load(&args.model)
        .with_context(|| format!("Failed to load model {}", args.model.display()))?;
    info!(aspect = %aspect.name, properties = aspect.properties.len(), "model loaded");

    let selected = select_properties(&aspect, args.entity.as_deref(), &args.properties)?;

    let fields: Vec<FieldDescriptor> = selected
        .into_iter()
        .map(|p| resolve_field(p, &p.characteristic, None))
        .collect();

    let json = if args.compact {
        serde_json::to_string(&fields)
    } else {
        serde_json::to_string_pretty(&fields)
    }
    .context("Failed to serialize field descriptors")?;

    match &args.out {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write to stdout")?;
        }
    }

    // Summary goes to stderr so stdout stays valid JSON.
    let report = ResolutionReport::from_fields(&fields);
    eprintln!(
        "Resolved {} fields ({} list fields), {} validators ({} applied to children)",
        report.field_count,
        report.list_field_count,
        report.validator_count,
        report.wrapped_validator_count
    );
    for (kind, count) in &report.kinds {
        eprintln!("  {kind}: {count}");
    }
    Ok(())
}

/// Picks the properties to resolve: those of `entity` when given, else the
/// aspect's top-level ones, narrowed to `names` in the order given.
fn select_properties<'a>(
    aspect: &'a Aspect,
    entity: Option<&str>,
    names: &[String],
) -> Result<Vec<&'a Property>> {
    let properties = match entity {
        Some(name) => match aspect.find_entity(name) {
            Some(entity) => &entity.properties,
            None => bail!("Unknown entity '{name}' in aspect {}", aspect.name),
        },
        None => &aspect.properties,
    };
    if names.is_empty() {
        return Ok(properties.iter().collect());
    }
    names
        .iter()
        .map(|name| {
            properties
                .iter()
                .find(|p| &p.name == name)
                .ok_or_else(|| anyhow!("Unknown property '{name}'"))
        })
        .collect()
}
