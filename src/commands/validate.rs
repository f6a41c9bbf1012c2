//! Validate command implementation
//!
//! Loads the branch and deployed catalogs, checks them for duplicate
//! identities and ownership changes, and prints every conflict found. A run
//! with conflicts still completes; it only ends with a non-zero status.

use std::path::{Path, PathBuf};

use crate::catalog::store::{CatalogPaths, load_catalog, load_schema_catalog};
use crate::cli::ValidateArgs;
use crate::commands::helpers::{resolve_root, under_root};
use crate::domain::{Environment, ResourceKind};
use crate::error::{CatalogError, Result};
use crate::ui::Reporter;
use crate::validate::{Snapshot, TransferPolicy, ValidationReport, validate};

/// Catalog files taking part in one validation
#[derive(Debug, Clone, PartialEq, Eq)]
struct CatalogInputs {
    branch_kafka: Option<PathBuf>,
    branch_schemas: Option<PathBuf>,
    deployed_kafka: Option<PathBuf>,
    deployed_schemas: Option<PathBuf>,
}

impl CatalogInputs {
    /// Explicit paths win; with no branch path at all the default locations are used
    fn resolve(root: &Path, paths: &CatalogPaths, args: &ValidateArgs) -> Self {
        let anchor = |p: &Option<PathBuf>| p.as_deref().map(|p| under_root(root, p));
        let use_defaults = args.branch_kafka.is_none() && args.branch_schemas.is_none();

        if use_defaults {
            Self {
                branch_kafka: Some(paths.kafka()),
                branch_schemas: Some(paths.schemas()),
                deployed_kafka: anchor(&args.deployed_kafka).or_else(|| Some(paths.deployed_kafka())),
                deployed_schemas: anchor(&args.deployed_schemas)
                    .or_else(|| Some(paths.deployed_schemas())),
            }
        } else {
            Self {
                branch_kafka: anchor(&args.branch_kafka),
                branch_schemas: anchor(&args.branch_schemas),
                deployed_kafka: anchor(&args.deployed_kafka),
                deployed_schemas: anchor(&args.deployed_schemas),
            }
        }
    }
}

/// Run validate command
pub fn run(root: Option<PathBuf>, verbose: bool, args: ValidateArgs) -> Result<()> {
    let reporter = Reporter::new(verbose);
    let environment = Environment::new(&args.env)?;
    let root = resolve_root(root)?;
    let paths = CatalogPaths::new(&under_root(&root, &args.catalog_dir), &environment);
    let inputs = CatalogInputs::resolve(&root, &paths, &args);

    let policy = match &args.allow_transfers {
        Some(path) => TransferPolicy::load(&under_root(&root, path))?,
        None => TransferPolicy::default(),
    };
    if !policy.is_empty() {
        reporter.detail(format!("{} approved transfer rule(s)", policy.len()));
    }

    let branch = load_snapshot(
        &reporter,
        "branch",
        inputs.branch_kafka.as_deref(),
        inputs.branch_schemas.as_deref(),
    )?
    .unwrap_or_default();
    if branch.is_empty() {
        reporter.detail("Branch catalogs declare no resources");
    }
    let deployed = load_snapshot(
        &reporter,
        "deployed",
        inputs.deployed_kafka.as_deref(),
        inputs.deployed_schemas.as_deref(),
    )?;
    if deployed.is_none() {
        reporter.detail("No deployed catalog; only checking for duplicates within the branch");
    }

    let report = validate(&branch, deployed.as_ref(), &policy);
    print_report(&reporter, &environment, &report)
}

/// Load whichever catalogs exist into one snapshot; `None` when none exist
fn load_snapshot(
    reporter: &Reporter,
    side: &str,
    kafka: Option<&Path>,
    schemas: Option<&Path>,
) -> Result<Option<Snapshot>> {
    let mut snapshot = Snapshot::new();
    let mut found = false;

    if let Some(path) = kafka {
        match load_catalog(path)? {
            Some(catalog) => {
                reporter.detail(format!("Loaded {side} catalog {}", path.display()));
                snapshot.add_catalog(&catalog);
                found = true;
            }
            None => reporter.detail(format!("No {side} catalog at {}", path.display())),
        }
    }

    if let Some(path) = schemas {
        match load_schema_catalog(path)? {
            Some(catalog) => {
                reporter.detail(format!("Loaded {side} schemas catalog {}", path.display()));
                snapshot.add_schema_catalog(&catalog);
                found = true;
            }
            None => reporter.detail(format!("No {side} schemas catalog at {}", path.display())),
        }
    }

    Ok(found.then_some(snapshot))
}

fn print_report(
    reporter: &Reporter,
    environment: &Environment,
    report: &ValidationReport,
) -> Result<()> {
    for kind in ResourceKind::ALL {
        if report.conflicts_of(kind).next().is_none() {
            reporter.success(format!(
                "{} validation passed for {environment}",
                capitalize(kind.plural())
            ));
        } else {
            reporter.failure(format!(
                "{} validation FAILED for {environment}",
                capitalize(kind.plural())
            ));
        }
    }

    if !report.approved.is_empty() {
        reporter.numbered_list(
            "Approved ownership transfers:",
            report.approved.iter().map(|transfer| match &transfer.reason {
                Some(reason) => format!("{} [{}]", transfer.conflict, reason),
                None => transfer.conflict.to_string(),
            }),
        );
    }

    if report.is_valid() {
        println!();
        reporter.success(format!("All validations passed for {environment}"));
        return Ok(());
    }

    reporter.numbered_list(
        "VALIDATION FAILED - Conflicts detected:",
        report.conflicts.iter().map(ToString::to_string),
    );
    Err(CatalogError::ConflictsDetected {
        count: report.conflicts.len(),
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
