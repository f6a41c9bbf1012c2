//! Catalog aggregation
//!
//! Merges every domain's declaration for one environment into a single
//! [`Catalog`]. Aggregation is fail-fast: the first unreadable or malformed
//! declaration aborts the run and nothing is returned for the others.

pub mod discovery;
pub mod schemas;

use std::fs;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::domain::{DomainDeclaration, Environment};
use crate::error::{Result, fs::read_failed, input::declaration_parse_failed};

pub use discovery::{DeclarationFile, DomainLayout};
pub use schemas::aggregate_schema_catalog;

/// Outcome of aggregating one environment
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub catalog: Catalog,

    /// Declaration files merged, in merge order
    pub sources: Vec<DeclarationFile>,

    /// Non-fatal findings, e.g. schema references pointing at missing files
    pub warnings: Vec<String>,
}

/// Aggregate all declarations of `environment` found in `layout`
pub fn aggregate_catalog(layout: &DomainLayout, environment: &Environment) -> Result<Aggregation> {
    let sources = layout.declarations(environment)?;
    let mut catalog = Catalog::new();
    let mut warnings = Vec::new();

    if sources.is_empty() {
        warnings.push(format!(
            "No {} files found in {}/*/{}/",
            discovery::DECLARATION_FILE,
            discovery::DOMAINS_DIR,
            environment
        ));
    }

    for source in &sources {
        let declaration = read_declaration(layout, source)?;
        warnings.extend(missing_schema_files(layout, environment, source, &declaration));
        catalog.merge_domain(&source.domain, &declaration);
    }

    Ok(Aggregation {
        catalog,
        sources,
        warnings,
    })
}

pub fn read_declaration(layout: &DomainLayout, source: &DeclarationFile) -> Result<DomainDeclaration> {
    let display_path = layout.relative(&source.path);
    let content =
        fs::read_to_string(&source.path).map_err(|e| read_failed(&display_path, e.to_string()))?;
    DomainDeclaration::from_yaml(&content)
        .map_err(|e| declaration_parse_failed(&source.domain, &display_path, e.to_string()))
}

/// Schema file references are advisory here; content is checked elsewhere
fn missing_schema_files(
    layout: &DomainLayout,
    environment: &Environment,
    source: &DeclarationFile,
    declaration: &DomainDeclaration,
) -> Vec<String> {
    let env_dir = layout.env_dir(&source.domain, environment);
    declaration
        .schemas
        .iter()
        .filter(|schema| !env_dir.join(&schema.schema_file).is_file())
        .map(|schema| {
            let expected: PathBuf = env_dir.join(&schema.schema_file);
            format!(
                "Schema subject '{}' of domain '{}' references missing file {}",
                schema.subject,
                source.domain,
                layout.relative(&expected)
            )
        })
        .collect()
}
