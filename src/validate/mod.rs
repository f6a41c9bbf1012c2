//! Conflict validation
//!
//! Compares the proposed ("branch") catalog with the last deployed one. For
//! every kind independently:
//!
//! 1. an identity declared by more than one domain in the branch is a duplicate
//! 2. an identity already deployed under another domain is an ownership change
//!
//! All conflicts are collected in one pass; nothing stops at the first one.

pub mod conflict;
pub mod identity;
pub mod policy;

pub use conflict::Conflict;
pub use identity::{IdentityIndex, Snapshot};
pub use policy::TransferPolicy;

use crate::domain::ResourceKind;

/// An ownership change allowed by the transfer policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedTransfer {
    pub conflict: Conflict,
    pub reason: Option<String>,
}

/// Result of one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Blocking conflicts, ordered by kind then identity
    pub conflicts: Vec<Conflict>,

    /// Ownership changes approved by the transfer policy
    pub approved: Vec<ApprovedTransfer>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn conflicts_of(&self, kind: ResourceKind) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }
}

/// Validate `branch` against the optional `deployed` snapshot
///
/// Without a deployed snapshot only duplicates inside the branch can be found.
pub fn validate(
    branch: &Snapshot,
    deployed: Option<&Snapshot>,
    policy: &TransferPolicy,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    for kind in ResourceKind::ALL {
        check_kind(kind, branch, deployed, policy, &mut report);
    }
    report
}

fn check_kind(
    kind: ResourceKind,
    branch: &Snapshot,
    deployed: Option<&Snapshot>,
    policy: &TransferPolicy,
    report: &mut ValidationReport,
) {
    let branch_index = IdentityIndex::build(branch.declarations(kind));
    let deployed_index = deployed.map(|snapshot| IdentityIndex::build(snapshot.declarations(kind)));

    for (identity, domains) in branch_index.iter() {
        if domains.len() > 1 {
            report
                .conflicts
                .push(Conflict::duplicate(kind, identity, domains));
        }

        let Some(deployed_owner) = deployed_index
            .as_ref()
            .and_then(|index| index.owner(identity))
        else {
            continue;
        };

        let mut claimants: Vec<&String> = domains.iter().collect();
        claimants.sort();
        for branch_domain in claimants {
            if branch_domain == deployed_owner {
                continue;
            }
            let conflict = Conflict::ownership_change(kind, identity, deployed_owner, branch_domain);
            match policy.approval(kind, identity, deployed_owner, branch_domain) {
                Some(rule) => report.approved.push(ApprovedTransfer {
                    conflict,
                    reason: rule.reason.clone(),
                }),
                None => report.conflicts.push(conflict),
            }
        }
    }
}
