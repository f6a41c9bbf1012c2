//! Aggregated catalogs
//!
//! Two artifacts are produced per environment:
//! - `kafka-catalog.yaml` - every topic, schema and access entry, tagged with its owning domain
//! - `schemas-catalog.json` - one entry per schema document found on disk

pub mod store;

use serde::{Deserialize, Serialize};

use crate::domain::{
    AccessEntry, DomainDeclaration, Environment, Identified, Owned, ResourceKind,
    SchemaDeclaration, Topic,
};

/// Environment-wide view of all declared resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub topics: Vec<Owned<Topic>>,

    #[serde(default)]
    pub schemas: Vec<Owned<SchemaDeclaration>>,

    #[serde(default)]
    pub access_config: Vec<Owned<AccessEntry>>,

    /// Every domain that had a declaration file, in the order they were merged
    #[serde(default)]
    pub domains: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one domain's declaration into the catalog
    ///
    /// The declaration is copied; the domain is recorded even when it declares
    /// nothing.
    pub fn merge_domain(&mut self, domain: &str, declaration: &DomainDeclaration) {
        self.domains.push(domain.to_string());
        self.topics.extend(
            declaration
                .topics
                .iter()
                .map(|topic| Owned::copied(topic, domain)),
        );
        self.schemas.extend(
            declaration
                .schemas
                .iter()
                .map(|schema| Owned::copied(schema, domain)),
        );
        self.access_config.extend(
            declaration
                .access_config
                .iter()
                .map(|access| Owned::copied(access, domain)),
        );
    }

    /// `(identity, owning domain)` pairs for one kind, in catalog order
    pub fn identities(&self, kind: ResourceKind) -> Vec<(&str, &str)> {
        match kind {
            ResourceKind::Topic => owned_identities(&self.topics),
            ResourceKind::SchemaSubject => owned_identities(&self.schemas),
            ResourceKind::ServiceAccount => owned_identities(&self.access_config),
        }
    }

    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }

    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

fn owned_identities<T: Identified>(items: &[Owned<T>]) -> Vec<(&str, &str)> {
    items
        .iter()
        .map(|item| (item.identity(), item.owning_domain.as_str()))
        .collect()
}

/// One schema document found under `domains/<domain>/<env>/schemas/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFileEntry {
    pub subject: String,
    pub domain: String,
    pub file_path: String,
    pub file_name: String,
}

/// Schema-only catalog for one environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaCatalog {
    #[serde(default)]
    pub schemas: Vec<SchemaFileEntry>,

    /// Placeholder, always written as `null`
    #[serde(default)]
    pub timestamp: Option<String>,

    pub environment: String,
}

impl SchemaCatalog {
    pub fn new(environment: &Environment) -> Self {
        Self {
            schemas: Vec::new(),
            timestamp: None,
            environment: environment.to_string(),
        }
    }

    /// `(subject, domain)` pairs in catalog order
    pub fn subjects(&self) -> Vec<(&str, &str)> {
        self.schemas
            .iter()
            .map(|entry| (entry.subject.as_str(), entry.domain.as_str()))
            .collect()
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
