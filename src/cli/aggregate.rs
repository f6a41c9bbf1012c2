use clap::Parser;

use crate::catalog::store::DEFAULT_CATALOG_DIR;
use std::path::PathBuf;

/// Arguments for the aggregate and aggregate-schemas commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Aggregate the dev catalog:\n    catalog-guard aggregate --env dev\n\n\
                  Write catalogs somewhere else:\n    catalog-guard aggregate --env prod --output-dir build/catalogs")]
pub struct AggregateArgs {
    /// Environment name (dev, test, qa, prod)
    #[arg(long, short = 'e')]
    pub env: String,

    /// Output directory for aggregated catalogs
    #[arg(long, default_value = DEFAULT_CATALOG_DIR)]
    pub output_dir: PathBuf,
}
