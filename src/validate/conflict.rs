//! Conflict records

use std::fmt;

use crate::domain::ResourceKind;

/// Why an identity is in conflict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// Several domains declare the identity in the proposed catalog
    DuplicateInBranch { domains: Vec<String> },

    /// The identity is deployed under another domain
    OwnershipChange {
        deployed_domain: String,
        branch_domain: String,
    },
}

/// A violation of single ownership for one identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ResourceKind,
    pub identity: String,
    pub reason: ConflictReason,
}

impl Conflict {
    pub fn duplicate(kind: ResourceKind, identity: &str, domains: &[String]) -> Self {
        let mut domains = domains.to_vec();
        domains.sort();
        Self {
            kind,
            identity: identity.to_string(),
            reason: ConflictReason::DuplicateInBranch { domains },
        }
    }

    pub fn ownership_change(
        kind: ResourceKind,
        identity: &str,
        deployed_domain: &str,
        branch_domain: &str,
    ) -> Self {
        Self {
            kind,
            identity: identity.to_string(),
            reason: ConflictReason::OwnershipChange {
                deployed_domain: deployed_domain.to_string(),
                branch_domain: branch_domain.to_string(),
            },
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ConflictReason::DuplicateInBranch { domains } => write!(
                f,
                "{} '{}' defined in multiple domains: {}",
                self.kind,
                self.identity,
                domains.join(", ")
            ),
            ConflictReason::OwnershipChange {
                deployed_domain,
                branch_domain,
            } => write!(
                f,
                "{} '{}' already exists in domain '{}' (you are deploying in domain '{}')",
                self.kind, self.identity, deployed_domain, branch_domain
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_lists_sorted_domains() {
        let conflict = Conflict::duplicate(
            ResourceKind::Topic,
            "orders.created",
            &["orders".to_string(), "billing".to_string()],
        );
        assert_eq!(
            conflict.to_string(),
            "Topic 'orders.created' defined in multiple domains: billing, orders"
        );
        assert_eq!(
            conflict.reason,
            ConflictReason::DuplicateInBranch {
                domains: vec!["billing".to_string(), "orders".to_string()]
            }
        );
    }

    #[test]
    fn test_ownership_change_message() {
        let conflict = Conflict::ownership_change(
            ResourceKind::ServiceAccount,
            "sa-reporting",
            "analytics",
            "finance",
        );
        assert_eq!(
            conflict.to_string(),
            "Service account 'sa-reporting' already exists in domain 'analytics' \
             (you are deploying in domain 'finance')"
        );
    }
}
