//! Render command implementation
//!
//! Renders a single domain's declaration into a provisioning document. Other
//! domains are never read, so a broken declaration elsewhere does not block
//! rendering.

use std::path::{Path, PathBuf};

use crate::aggregate::discovery::DECLARATION_FILE;
use crate::aggregate::{DeclarationFile, DomainLayout, read_declaration};
use crate::catalog::store::write_atomic;
use crate::cli::RenderArgs;
use crate::commands::helpers::{resolve_root, under_root};
use crate::domain::Environment;
use crate::error::{Result, config::domain_not_found, fs::write_failed};
use crate::render::{MetadataSource, render};
use crate::ui::Reporter;

/// Subdirectory of `<output-dir>/<env>/` holding provisioning documents
const PROVISIONING_DIR: &str = "provisioning";

/// Run render command
pub fn run(root: Option<PathBuf>, verbose: bool, args: RenderArgs) -> Result<()> {
    let reporter = Reporter::new(verbose);
    let environment = Environment::new(&args.env)?;
    let root = resolve_root(root)?;
    let layout = DomainLayout::open(&root)?;

    let source = locate_declaration(&layout, &args.domain, &environment)?;
    reporter.step(format!(
        "Rendering domain: {} ({})",
        source.domain,
        layout.relative(&source.path)
    ));
    let declaration = read_declaration(&layout, &source)?;
    if declaration.is_empty() {
        reporter.warn(format!(
            "Domain '{}' declares no resources for {environment}",
            source.domain
        ));
    }

    let metadata_source =
        MetadataSource::from_option(args.metadata_file.map(|path| under_root(layout.root(), &path)));
    let metadata = metadata_source.resolve()?;
    reporter.detail(format!(
        "cluster {} in environment {}",
        metadata.cluster_id, metadata.environment_id
    ));

    let document = render(&declaration, metadata);
    reporter.detail(format!(
        "{} topic(s), {} schema(s), {} service account(s), {} ACL binding(s)",
        document.topics.len(),
        document.schemas.len(),
        document.service_accounts.len(),
        document.acls.len()
    ));
    if document.acls.is_empty() {
        reporter.detail("no ACL bindings");
    }
    for (key, binding) in document.acls.iter() {
        reporter.detail(format!(
            "{key}: {} {} on {}",
            binding.principal, binding.role, binding.target
        ));
    }

    let output = match &args.output {
        Some(path) => under_root(layout.root(), path),
        None => default_output(
            &under_root(layout.root(), &args.output_dir),
            &environment,
            &source.domain,
        ),
    };
    let json = document
        .to_json()
        .map_err(|e| write_failed(output.display().to_string(), e.to_string()))?;
    write_atomic(&output, json.as_bytes())?;

    reporter.success(format!(
        "Provisioning document written to: {}",
        output.display()
    ));
    Ok(())
}

/// The declaration of `domain` for `environment`, which must exist
fn locate_declaration(
    layout: &DomainLayout,
    domain: &str,
    environment: &Environment,
) -> Result<DeclarationFile> {
    let is_plain_name =
        !domain.is_empty() && !domain.starts_with('.') && !domain.contains(['/', '\\']);
    if !is_plain_name {
        return Err(domain_not_found(domain, environment.as_str()));
    }

    let path = layout.env_dir(domain, environment).join(DECLARATION_FILE);
    if !path.is_file() {
        return Err(domain_not_found(domain, environment.as_str()));
    }
    Ok(DeclarationFile {
        domain: domain.to_string(),
        path,
    })
}

fn default_output(output_dir: &Path, environment: &Environment, domain: &str) -> PathBuf {
    output_dir
        .join(environment.as_str())
        .join(PROVISIONING_DIR)
        .join(format!("{domain}.json"))
}
