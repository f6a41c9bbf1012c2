//! Provisioning document rendering
//!
//! Turns one domain's declaration into the JSON document the provisioning
//! tool consumes. Rendering is a pure per-domain transformation; it never looks
//! at other domains.

pub mod acl;
pub mod metadata;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::DomainDeclaration;

pub use acl::{AclBinding, AclBindings, AclIndexAllocator, AclTarget};
pub use metadata::{ClusterMetadata, MetadataSource};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSpec {
    pub partitions: u32,
    pub replication_factor: u16,
    pub config: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSpec {
    pub subject: String,
    pub schema_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceAccountSpec {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The provisioning document for one domain and environment
#[derive(Debug, PartialEq, Serialize)]
pub struct ProvisioningDocument {
    pub metadata: ClusterMetadata,
    pub topics: BTreeMap<String, TopicSpec>,
    pub schemas: BTreeMap<String, SchemaSpec>,
    pub service_accounts: BTreeMap<String, ServiceAccountSpec>,
    pub acls: AclBindings,
}

impl ProvisioningDocument {
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Render a declaration against resolved cluster metadata
///
/// ACL keys are allocated once for the whole document: first one binding per
/// (access entry, topic) pair, then the legacy ACL entries.
pub fn render(declaration: &DomainDeclaration, metadata: ClusterMetadata) -> ProvisioningDocument {
    let topics = declaration
        .topics
        .iter()
        .map(|topic| {
            (
                topic.name.clone(),
                TopicSpec {
                    partitions: topic.partitions,
                    replication_factor: topic.replication_factor,
                    config: topic.config.clone(),
                },
            )
        })
        .collect();

    let schemas = declaration
        .schemas
        .iter()
        .map(|schema| {
            (
                schema.subject.clone(),
                SchemaSpec {
                    subject: schema.subject.clone(),
                    schema_file: schema.schema_file.clone(),
                },
            )
        })
        .collect();

    let service_accounts = declaration
        .access_config
        .iter()
        .map(|access| {
            (
                access.name.clone(),
                ServiceAccountSpec {
                    role: access.role.clone(),
                    description: access.description.clone(),
                },
            )
        })
        .collect();

    let mut allocator = AclIndexAllocator::new();
    let mut acls = AclBindings::default();
    for access in &declaration.access_config {
        for topic in &access.topics {
            acls.push(
                &mut allocator,
                AclBinding {
                    principal: access.name.clone(),
                    role: access.role.clone(),
                    target: AclTarget::topic(topic),
                },
            );
        }
    }
    for legacy in &declaration.acls {
        acls.push(
            &mut allocator,
            AclBinding {
                principal: legacy.principal.clone(),
                role: legacy.role.clone(),
                target: AclTarget::CrnPattern(legacy.crn_pattern.clone()),
            },
        );
    }

    ProvisioningDocument {
        metadata,
        topics,
        schemas,
        service_accounts,
        acls,
    }
}
