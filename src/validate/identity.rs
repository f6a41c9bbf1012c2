//! Identity → owning domain mappings

use std::collections::BTreeMap;

use crate::catalog::{Catalog, SchemaCatalog};
use crate::domain::ResourceKind;

/// Every `(identity, domain)` declaration of one side of a validation
///
/// A snapshot is assembled from whichever catalogs were supplied: topics and
/// access entries come from the aggregated catalog, schema subjects from both
/// the aggregated catalog and the schema-only catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    declarations: BTreeMap<ResourceKind, Vec<(String, String)>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_catalog(&mut self, catalog: &Catalog) {
        for kind in ResourceKind::ALL {
            for (identity, domain) in catalog.identities(kind) {
                self.add(kind, identity, domain);
            }
        }
    }

    pub fn add_schema_catalog(&mut self, catalog: &SchemaCatalog) {
        for (subject, domain) in catalog.subjects() {
            self.add(ResourceKind::SchemaSubject, subject, domain);
        }
    }

    pub fn add(&mut self, kind: ResourceKind, identity: &str, domain: &str) {
        self.declarations
            .entry(kind)
            .or_default()
            .push((identity.to_string(), domain.to_string()));
    }

    /// Declarations of one kind in the order they were added
    pub fn declarations(&self, kind: ResourceKind) -> &[(String, String)] {
        self.declarations.get(&kind).map_or(&[][..], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.values().all(Vec::is_empty)
    }
}

/// Identity → distinct owning domains, for one kind
///
/// Identities iterate in sorted order. Domains keep the order in which they
/// were first seen.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    owners: BTreeMap<String, Vec<String>>,
}

impl IdentityIndex {
    pub fn build(declarations: &[(String, String)]) -> Self {
        let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (identity, domain) in declarations {
            let domains = owners.entry(identity.clone()).or_default();
            if !domains.contains(domain) {
                domains.push(domain.clone());
            }
        }
        Self { owners }
    }

    /// The first domain recorded for `identity`
    pub fn owner(&self, identity: &str) -> Option<&str> {
        self.owners
            .get(identity)
            .and_then(|domains| domains.first())
            .map(String::as_str)
    }

    /// Identities with their distinct domains, sorted by identity
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.owners
            .iter()
            .map(|(identity, domains)| (identity.as_str(), domains.as_slice()))
    }
}
