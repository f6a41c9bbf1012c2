//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - aggregate: Aggregate and aggregate-schemas command arguments
//! - validate: Validate command arguments
//! - render: Render command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod aggregate;
pub mod completions;
pub mod render;
pub mod validate;

pub use aggregate::AggregateArgs;
pub use completions::CompletionsArgs;
pub use render::RenderArgs;
pub use validate::ValidateArgs;

/// catalog-guard - domain catalog aggregation and conflict validation
#[derive(Parser, Debug)]
#[command(
    name = "catalog-guard",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Aggregate per-domain Kafka declarations and reject ownership conflicts",
    long_about = "catalog-guard merges the topics, schema subjects and service accounts declared by \
                  every domain under domains/<domain>/<env>/ into one catalog per environment, and \
                  refuses change sets where two domains claim the same resource or a resource \
                  changes owner.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  catalog-guard aggregate --env dev          \x1b[90m# Build catalogs/dev/kafka-catalog.yaml\x1b[0m\n   \
                  catalog-guard aggregate-schemas --env dev  \x1b[90m# Build catalogs/dev/schemas-catalog.json\x1b[0m\n   \
                  catalog-guard validate --env dev           \x1b[90m# Check against catalogs/dev/.deployed/\x1b[0m\n   \
                  catalog-guard render --env dev -d orders   \x1b[90m# Provisioning document for one domain\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Repository root containing domains/ (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "CATALOG_GUARD_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge all domain declarations of an environment into one catalog
    Aggregate(AggregateArgs),

    /// Collect all schema documents of an environment into one catalog
    #[command(name = "aggregate-schemas")]
    AggregateSchemas(AggregateArgs),

    /// Check branch catalogs for duplicate identities and ownership changes
    Validate(ValidateArgs),

    /// Render one domain's provisioning document
    Render(RenderArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
