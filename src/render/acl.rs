//! ACL bindings and their key allocation

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A principal granted a role on a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AclBinding {
    pub principal: String,
    pub role: String,
    #[serde(flatten)]
    pub target: AclTarget,
}

/// What a binding applies to; the variant decides the key it is written under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AclTarget {
    /// `"resource": "topic:<name>"`, derived from an access entry
    Resource(String),
    /// `"crn_pattern": "<crn>"`, copied from a legacy ACL entry
    CrnPattern(String),
}

impl AclTarget {
    pub fn topic(name: &str) -> Self {
        AclTarget::Resource(format!("topic:{name}"))
    }
}

impl fmt::Display for AclTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AclTarget::Resource(resource) => f.write_str(resource),
            AclTarget::CrnPattern(pattern) => f.write_str(pattern),
        }
    }
}

/// Hands out `acl_<n>` keys, strictly increasing across every pass
#[derive(Debug, Default)]
pub struct AclIndexAllocator {
    next: usize,
}

impl AclIndexAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> String {
        let key = format!("acl_{}", self.next);
        self.next += 1;
        key
    }
}

/// Keyed bindings, serialized as a map in allocation order
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AclBindings {
    entries: Vec<(String, AclBinding)>,
}

impl AclBindings {
    pub fn push(&mut self, allocator: &mut AclIndexAllocator, binding: AclBinding) {
        self.entries.push((allocator.allocate(), binding));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AclBinding)> {
        self.entries.iter().map(|(key, binding)| (key.as_str(), binding))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AclBindings {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, binding) in &self.entries {
            map.serialize_entry(key, binding)?;
        }
        map.end()
    }
}
