//! Aggregate and aggregate-schemas command implementations
//!
//! Both commands write their catalog under `<output-dir>/<env>/`, replacing
//! the previous one, and report a digest of the written file.

use std::path::PathBuf;

use crate::aggregate::{DomainLayout, aggregate_catalog, aggregate_schema_catalog};
use crate::catalog::store::{CatalogPaths, write_catalog, write_schema_catalog};
use crate::cli::AggregateArgs;
use crate::commands::helpers::{resolve_root, under_root};
use crate::domain::Environment;
use crate::error::Result;
use crate::hash;
use crate::ui::Reporter;

/// Run aggregate command
pub fn run(root: Option<PathBuf>, verbose: bool, args: AggregateArgs) -> Result<()> {
    let reporter = Reporter::new(verbose);
    let environment = Environment::new(&args.env)?;
    let root = resolve_root(root)?;
    let layout = DomainLayout::open(&root)?;

    let aggregation = aggregate_catalog(&layout, &environment)?;
    for source in &aggregation.sources {
        reporter.step(format!(
            "Processing domain: {} ({})",
            source.domain,
            layout.relative(&source.path)
        ));
        reporter.detail(format!("input digest: {}", hash::hash_file(&source.path)?));
    }
    for warning in &aggregation.warnings {
        reporter.warn(warning);
    }

    let catalog = &aggregation.catalog;
    reporter.detail(format!(
        "{} domain(s), {} topic(s), {} schema(s), {} access entries",
        catalog.domains.len(),
        catalog.topics.len(),
        catalog.schemas.len(),
        catalog.access_config.len()
    ));

    let paths = CatalogPaths::new(&under_root(&root, &args.output_dir), &environment);
    let written = write_catalog(&paths, catalog)?;
    reporter.success(format!(
        "Aggregated catalog written to: {}",
        written.path.display()
    ));
    reporter.step(format!("Catalog digest: {}", written.digest));

    Ok(())
}

/// Run aggregate-schemas command
pub fn run_schemas(root: Option<PathBuf>, verbose: bool, args: AggregateArgs) -> Result<()> {
    let reporter = Reporter::new(verbose);
    let environment = Environment::new(&args.env)?;
    let root = resolve_root(root)?;
    let layout = DomainLayout::open(&root)?;

    let aggregation = aggregate_schema_catalog(&layout, &environment)?;
    if aggregation.documents.is_empty() {
        reporter.step(format!(
            "No schema files found in domains/*/{environment}/schemas/"
        ));
    } else {
        reporter.step(format!(
            "Found {} schema files for {}",
            aggregation.documents.len(),
            environment
        ));
    }
    for document in &aggregation.documents {
        reporter.detail(format!(
            "Processing schema: {} from domain {}",
            document.subject, document.domain
        ));
    }

    let paths = CatalogPaths::new(&under_root(&root, &args.output_dir), &environment);
    let written = write_schema_catalog(&paths, &aggregation.catalog)?;
    reporter.success(format!(
        "Schemas catalog written to: {}",
        written.path.display()
    ));
    reporter.step(format!("Catalog digest: {}", written.digest));

    Ok(())
}
