//! Cluster metadata resolution
//!
//! The provisioning document needs to know which cluster and schema registry
//! it targets. That information either comes from the process environment
//! (CI injects it per deployment environment) or from a YAML document checked
//! into the repository. The two are one tagged strategy so callers never mix
//! sources.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{
    Result,
    config::missing_metadata,
    fs::{not_found, read_failed},
    input::metadata_parse_failed,
};

pub const CLUSTER_ID_VAR: &str = "KAFKA_CLUSTER_ID";
pub const ENVIRONMENT_ID_VAR: &str = "CONFLUENT_ENVIRONMENT_ID";
pub const REST_ENDPOINT_VAR: &str = "KAFKA_REST_ENDPOINT";
pub const SCHEMA_REGISTRY_ID_VAR: &str = "SCHEMA_REGISTRY_ID";
pub const SCHEMA_REGISTRY_ENDPOINT_VAR: &str = "SCHEMA_REGISTRY_ENDPOINT";

/// Identifiers and endpoints of the target cluster; never credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMetadata {
    pub cluster_id: String,
    pub environment_id: String,
    pub rest_endpoint: String,
    pub schema_registry_id: String,
    pub schema_registry_endpoint: String,
}

/// Where cluster metadata is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSource {
    /// Process environment variables
    Environment,
    /// A YAML document with the [`ClusterMetadata`] fields
    Document(PathBuf),
}

impl MetadataSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(MetadataSource::Environment, MetadataSource::Document)
    }

    /// Resolve metadata from this source
    pub fn resolve(&self) -> Result<ClusterMetadata> {
        match self {
            MetadataSource::Environment => {
                resolve_with(|key| std::env::var(key).ok(), "environment variable")
            }
            MetadataSource::Document(path) => load_document(path),
        }
    }
}

/// Resolve metadata through `lookup`; empty values count as missing
pub fn resolve_with<F>(lookup: F, origin: &str) -> Result<ClusterMetadata>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| -> Result<String> {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| missing_metadata(key, origin))
    };

    Ok(ClusterMetadata {
        cluster_id: get(CLUSTER_ID_VAR)?,
        environment_id: get(ENVIRONMENT_ID_VAR)?,
        rest_endpoint: get(REST_ENDPOINT_VAR)?,
        schema_registry_id: get(SCHEMA_REGISTRY_ID_VAR)?,
        schema_registry_endpoint: get(SCHEMA_REGISTRY_ENDPOINT_VAR)?,
    })
}

fn load_document(path: &Path) -> Result<ClusterMetadata> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(not_found(display));
    }
    let content = fs::read_to_string(path).map_err(|e| read_failed(&display, e.to_string()))?;
    let metadata: ClusterMetadata =
        serde_yaml::from_str(&content).map_err(|e| metadata_parse_failed(&display, e.to_string()))?;

    for (field, value) in [
        ("cluster_id", &metadata.cluster_id),
        ("environment_id", &metadata.environment_id),
        ("rest_endpoint", &metadata.rest_endpoint),
        ("schema_registry_id", &metadata.schema_registry_id),
        ("schema_registry_endpoint", &metadata.schema_registry_endpoint),
    ] {
        if value.trim().is_empty() {
            return Err(missing_metadata(field, &display));
        }
    }

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (CLUSTER_ID_VAR, "lkc-123"),
            (ENVIRONMENT_ID_VAR, "env-abc"),
            (REST_ENDPOINT_VAR, "https://pkc.example:443"),
            (SCHEMA_REGISTRY_ID_VAR, "lsrc-9"),
            (SCHEMA_REGISTRY_ENDPOINT_VAR, "https://psrc.example"),
        ])
    }

    #[test]
    fn test_resolve_with_complete_lookup() {
        let vars = full_env();
        let metadata = resolve_with(|k| vars.get(k).map(|v| (*v).to_string()), "test").unwrap();
        assert_eq!(metadata.cluster_id, "lkc-123");
        assert_eq!(metadata.schema_registry_endpoint, "https://psrc.example");
    }

    #[test]
    fn test_missing_variable_is_named() {
        let mut vars = full_env();
        vars.remove(REST_ENDPOINT_VAR);
        let err = resolve_with(|k| vars.get(k).map(|v| (*v).to_string()), "test").unwrap_err();
        assert!(matches!(err, CatalogError::MissingMetadata { ref key, .. } if key == REST_ENDPOINT_VAR));
    }

    #[test]
    fn test_blank_variable_counts_as_missing() {
        let mut vars = full_env();
        vars.insert(CLUSTER_ID_VAR, "  ");
        assert!(resolve_with(|k| vars.get(k).map(|v| (*v).to_string()), "test").is_err());
    }

    #[test]
    fn test_document_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cluster.yaml");
        std::fs::write(
            &path,
            "cluster_id: lkc-1\nenvironment_id: env-1\nrest_endpoint: https://rest\nschema_registry_id: lsrc-1\nschema_registry_endpoint: https://sr\n",
        )
        .unwrap();

        let metadata = MetadataSource::Document(path).resolve().unwrap();
        assert_eq!(metadata.environment_id, "env-1");
    }

    #[test]
    fn test_document_with_blank_field_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cluster.yaml");
        std::fs::write(
            &path,
            "cluster_id: ''\nenvironment_id: env-1\nrest_endpoint: https://rest\nschema_registry_id: lsrc-1\nschema_registry_endpoint: https://sr\n",
        )
        .unwrap();
        assert!(MetadataSource::Document(path).resolve().is_err());
    }

    #[test]
    fn test_missing_document_is_error() {
        let temp = TempDir::new().unwrap();
        let source = MetadataSource::from_option(Some(temp.path().join("absent.yaml")));
        assert!(matches!(
            source.resolve().unwrap_err(),
            CatalogError::FileNotFound { .. }
        ));
    }

    #[test]
    #[serial]
    fn test_environment_source_reads_process_env() {
        for (key, value) in full_env() {
            unsafe {
                std::env::set_var(key, value);
            }
        }

        let metadata = MetadataSource::from_option(None).resolve();

        for key in full_env().keys() {
            unsafe {
                std::env::remove_var(key);
            }
        }
        assert_eq!(metadata.unwrap().rest_endpoint, "https://pkc.example:443");
    }
}
