//! Ownership transfer allow-list
//!
//! Moving a deployed resource to another domain is rejected unless a transfer
//! entry names it:
//!
//! ```yaml
//! transfers:
//!   - kind: topic
//!     identity: "orders.*"
//!     from: orders
//!     to: fulfilment
//!     reason: fulfilment took over order events
//! ```
//!
//! `identity` is a glob. Duplicates inside one catalog can never be approved.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::ResourceKind;
use crate::error::{
    Result,
    config::{invalid_policy, policy_not_found},
    fs::read_failed,
};

/// One approved ownership transfer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRule {
    pub kind: ResourceKind,
    pub identity: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A rule together with its identity pattern, compiled once at load time
#[derive(Debug)]
struct CompiledRule {
    rule: TransferRule,
    pattern: Glob<'static>,
}

impl CompiledRule {
    fn matches(&self, kind: ResourceKind, identity: &str, from: &str, to: &str) -> bool {
        self.rule.kind == kind
            && self.rule.from == from
            && self.rule.to == to
            && self.pattern.matched(&CandidatePath::from(identity)).is_some()
    }
}

#[derive(Debug, Default, Deserialize)]
struct PolicyDocument {
    #[serde(default)]
    transfers: Vec<TransferRule>,
}

/// The set of approved transfers; empty by default
#[derive(Debug, Default)]
pub struct TransferPolicy {
    rules: Vec<CompiledRule>,
}

impl TransferPolicy {
    /// Load a policy file; it must exist since it was asked for explicitly
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(policy_not_found(display));
        }
        let content = fs::read_to_string(path).map_err(|e| read_failed(&display, e.to_string()))?;
        Self::from_yaml(&content).map_err(|reason| invalid_policy(display, reason))
    }

    /// Parse a policy document, checking every identity pattern
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, String> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        let document: PolicyDocument = if value.is_null() {
            PolicyDocument::default()
        } else {
            serde_yaml::from_value(value).map_err(|e| e.to_string())?
        };

        let rules = document
            .transfers
            .into_iter()
            .map(|rule| {
                let pattern = Glob::new(&rule.identity)
                    .map(Glob::into_owned)
                    .map_err(|e| format!("identity pattern '{}': {}", rule.identity, e))?;
                Ok(CompiledRule { rule, pattern })
            })
            .collect::<std::result::Result<Vec<_>, String>>()?;

        Ok(Self { rules })
    }

    /// The first rule approving `identity` moving from `from` to `to`
    pub fn approval(
        &self,
        kind: ResourceKind,
        identity: &str,
        from: &str,
        to: &str,
    ) -> Option<&TransferRule> {
        self.rules
            .iter()
            .find(|compiled| compiled.matches(kind, identity, from, to))
            .map(|compiled| &compiled.rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
