//! Schema-only catalog aggregation
//!
//! Every `domains/<domain>/<env>/schemas/<subject>.avsc` becomes one entry.
//! Each document must be valid JSON; the first invalid one aborts the run.

use std::fs;

use super::discovery::{DomainLayout, SchemaDocument};
use crate::catalog::{SchemaCatalog, SchemaFileEntry};
use crate::domain::Environment;
use crate::error::{Result, fs::read_failed, input::schema_parse_failed};

/// Outcome of aggregating schema documents for one environment
#[derive(Debug, Clone)]
pub struct SchemaAggregation {
    pub catalog: SchemaCatalog,
    pub documents: Vec<SchemaDocument>,
}

/// Collect all schema documents of `environment`
pub fn aggregate_schema_catalog(
    layout: &DomainLayout,
    environment: &Environment,
) -> Result<SchemaAggregation> {
    let documents = layout.schema_documents(environment)?;
    let mut catalog = SchemaCatalog::new(environment);

    for document in &documents {
        let file_path = layout.relative(&document.path);
        let content =
            fs::read_to_string(&document.path).map_err(|e| read_failed(&file_path, e.to_string()))?;
        serde_json::from_str::<serde_json::Value>(&content)
            .map_err(|e| schema_parse_failed(&document.domain, &file_path, e.to_string()))?;

        let file_name = document
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        catalog.schemas.push(SchemaFileEntry {
            subject: document.subject.clone(),
            domain: document.domain.clone(),
            file_path,
            file_name,
        });
    }

    Ok(SchemaAggregation { catalog, documents })
}
