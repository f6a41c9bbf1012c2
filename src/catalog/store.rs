//! Catalog persistence
//!
//! Catalogs live at `<catalog-dir>/<env>/`; the last deployed state is kept
//! next to them under `.deployed/`. Writes replace the whole file atomically,
//! reads treat a missing file as "no catalog".

use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, SchemaCatalog};
use crate::domain::Environment;
use crate::error::{Result, fs::read_failed, fs::write_failed, input::catalog_parse_failed};
use crate::hash;

/// Aggregated topics/schemas/access catalog filename
pub const KAFKA_CATALOG_FILE: &str = "kafka-catalog.yaml";

/// Schema-only catalog filename
pub const SCHEMA_CATALOG_FILE: &str = "schemas-catalog.json";

/// Directory holding the last successfully deployed catalogs
pub const DEPLOYED_DIR: &str = ".deployed";

/// Default directory catalogs are written to and read from
pub const DEFAULT_CATALOG_DIR: &str = "catalogs";

/// Catalog locations for one environment
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    env_dir: PathBuf,
}

impl CatalogPaths {
    pub fn new(catalog_dir: &Path, environment: &Environment) -> Self {
        Self {
            env_dir: catalog_dir.join(environment.as_str()),
        }
    }

    pub fn kafka(&self) -> PathBuf {
        self.env_dir.join(KAFKA_CATALOG_FILE)
    }

    pub fn schemas(&self) -> PathBuf {
        self.env_dir.join(SCHEMA_CATALOG_FILE)
    }

    pub fn deployed_kafka(&self) -> PathBuf {
        self.env_dir.join(DEPLOYED_DIR).join(KAFKA_CATALOG_FILE)
    }

    pub fn deployed_schemas(&self) -> PathBuf {
        self.env_dir.join(DEPLOYED_DIR).join(SCHEMA_CATALOG_FILE)
    }
}

/// A catalog file that was written to disk
#[derive(Debug, Clone)]
pub struct WrittenCatalog {
    pub path: PathBuf,
    /// BLAKE3 digest of the written bytes
    pub digest: String,
}

/// Write the aggregated catalog, replacing any previous one
pub fn write_catalog(paths: &CatalogPaths, catalog: &Catalog) -> Result<WrittenCatalog> {
    let path = paths.kafka();
    let content = catalog
        .to_yaml()
        .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
    write_atomic(&path, content.as_bytes())?;
    Ok(WrittenCatalog {
        digest: hash::hash_bytes(content.as_bytes()),
        path,
    })
}

/// Write the schema-only catalog, replacing any previous one
pub fn write_schema_catalog(paths: &CatalogPaths, catalog: &SchemaCatalog) -> Result<WrittenCatalog> {
    let path = paths.schemas();
    let content = catalog
        .to_json()
        .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
    write_atomic(&path, content.as_bytes())?;
    Ok(WrittenCatalog {
        digest: hash::hash_bytes(content.as_bytes()),
        path,
    })
}

/// Load an aggregated catalog; `None` when the file does not exist
pub fn load_catalog(path: &Path) -> Result<Option<Catalog>> {
    load_document(path, Catalog::from_yaml)
}

/// Load a schema-only catalog; `None` when the file does not exist
pub fn load_schema_catalog(path: &Path) -> Result<Option<SchemaCatalog>> {
    load_document(path, SchemaCatalog::from_json)
}

/// Generic helper: absent file is `None`, unparsable file is fatal
fn load_document<T, E, F>(path: &Path, parser: F) -> Result<Option<T>>
where
    F: FnOnce(&str) -> std::result::Result<T, E>,
    E: std::fmt::Display,
{
    if !path.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

    parser(&content)
        .map(Some)
        .map_err(|e| catalog_parse_failed(path.display().to_string(), e.to_string()))
}

/// Write `content` to `path` through a sibling temp file and a rename
///
/// Readers never see a half-written catalog. The file gets the same
/// permissions as any other file created by `fs::write`.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .map_err(|e| write_failed(parent.display().to_string(), e.to_string()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&tmp_path, content)
        .map_err(|e| write_failed(tmp_path.display().to_string(), e.to_string()))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_failed(path.display().to_string(), e.to_string()));
    }

    Ok(())
}
