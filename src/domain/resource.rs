//! Resource declarations authored by a single domain
//!
//! These mirror one domain's `kafka-request.yaml` for one environment. Every
//! collection is optional so an empty file is a valid declaration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::owned::Identified;

/// Partition count used when a topic does not declare one
pub const DEFAULT_PARTITIONS: u32 = 3;

/// Replication factor used when a topic does not declare one
pub const DEFAULT_REPLICATION_FACTOR: u16 = 3;

fn default_partitions() -> u32 {
    DEFAULT_PARTITIONS
}

fn default_replication_factor() -> u16 {
    DEFAULT_REPLICATION_FACTOR
}

/// A topic declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,

    #[serde(default = "default_partitions")]
    pub partitions: u32,

    #[serde(default = "default_replication_factor")]
    pub replication_factor: u16,

    /// Topic-level configuration overrides (e.g. `retention.ms`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, serde_yaml::Value>,
}

/// A schema subject declaration referencing a schema document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDeclaration {
    pub subject: String,

    /// Path of the schema document, relative to the domain's environment directory
    pub schema_file: String,
}

/// A service account together with the topics it is granted access to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessEntry {
    pub name: String,

    pub role: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A flat ACL entry in the older declaration format
///
/// Only consumed when rendering a provisioning document; ACLs carry no
/// identity of their own and are never aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyAcl {
    pub principal: String,
    pub role: String,
    pub crn_pattern: String,
}

/// Everything one domain declares for one environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainDeclaration {
    #[serde(default)]
    pub topics: Vec<Topic>,

    #[serde(default)]
    pub schemas: Vec<SchemaDeclaration>,

    #[serde(default)]
    pub access_config: Vec<AccessEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acls: Vec<LegacyAcl>,
}

impl DomainDeclaration {
    /// Parse a declaration from YAML
    ///
    /// An empty or comment-only document yields an empty declaration.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
            && self.schemas.is_empty()
            && self.access_config.is_empty()
            && self.acls.is_empty()
    }
}

impl Identified for Topic {
    fn identity(&self) -> &str {
        &self.name
    }
}

impl Identified for SchemaDeclaration {
    fn identity(&self) -> &str {
        &self.subject
    }
}

impl Identified for AccessEntry {
    fn identity(&self) -> &str {
        &self.name
    }
}
