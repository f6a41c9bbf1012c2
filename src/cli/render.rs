use clap::Parser;

use crate::catalog::store::DEFAULT_CATALOG_DIR;
use std::path::PathBuf;

/// Arguments for the render command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Render with metadata from the environment:\n    catalog-guard render --env dev --domain orders\n\n\
                  Render with metadata from a file:\n    catalog-guard render --env prod --domain orders --metadata-file clusters/prod.yaml")]
pub struct RenderArgs {
    /// Environment name (dev, test, qa, prod)
    #[arg(long, short = 'e')]
    pub env: String,

    /// Domain whose declaration is rendered
    #[arg(long, short = 'd')]
    pub domain: String,

    /// Read cluster metadata from this YAML document instead of environment variables
    #[arg(long)]
    pub metadata_file: Option<PathBuf>,

    /// Output path (defaults to <output-dir>/<env>/provisioning/<domain>.json)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output directory used when --output is not given
    #[arg(long, default_value = DEFAULT_CATALOG_DIR)]
    pub output_dir: PathBuf,
}
