//! Ownership-annotated resources
//!
//! Aggregated catalogs never store a bare declaration: every entry is an
//! [`Owned`] copy carrying the domain that declared it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a resource identity namespace
///
/// Each kind is checked independently; a topic and a service account may share
/// a name without conflicting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Topic,
    #[serde(rename = "schema", alias = "schema-subject")]
    SchemaSubject,
    #[serde(alias = "access")]
    ServiceAccount,
}

impl ResourceKind {
    /// All kinds, in report order
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Topic,
        ResourceKind::SchemaSubject,
        ResourceKind::ServiceAccount,
    ];

    /// Plural label used in report headings
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Topic => "topics",
            ResourceKind::SchemaSubject => "schema subjects",
            ResourceKind::ServiceAccount => "service accounts",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Topic => "Topic",
            ResourceKind::SchemaSubject => "Schema subject",
            ResourceKind::ServiceAccount => "Service account",
        };
        f.write_str(label)
    }
}

/// A resource with a unique key within its kind
pub trait Identified {
    fn identity(&self) -> &str;
}

/// A declared resource plus the domain that owns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owned<T> {
    #[serde(flatten)]
    pub resource: T,

    /// Older catalogs wrote this field as `_domain`
    #[serde(alias = "_domain")]
    pub owning_domain: String,
}

impl<T: Clone> Owned<T> {
    /// Copy a domain's declaration into an owned catalog entry
    pub fn copied(resource: &T, owning_domain: &str) -> Self {
        Self {
            resource: resource.clone(),
            owning_domain: owning_domain.to_string(),
        }
    }
}

impl<T: Identified> Owned<T> {
    pub fn identity(&self) -> &str {
        self.resource.identity()
    }
}
