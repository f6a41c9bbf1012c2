use clap::Parser;

use crate::catalog::store::DEFAULT_CATALOG_DIR;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the default catalog locations:\n    catalog-guard validate --env dev\n\n\
                  Validate explicit catalogs:\n    catalog-guard validate --env dev \\\n      \
                  --branch-kafka catalogs/dev/kafka-catalog.yaml \\\n      \
                  --deployed-kafka catalogs/dev/.deployed/kafka-catalog.yaml\n\n\
                  Allow recorded ownership transfers:\n    catalog-guard validate --env prod --allow-transfers transfers.yaml")]
pub struct ValidateArgs {
    /// Environment name (dev, test, qa, prod)
    #[arg(long, short = 'e')]
    pub env: String,

    /// Branch kafka-catalog.yaml path
    #[arg(long)]
    pub branch_kafka: Option<PathBuf>,

    /// Branch schemas-catalog.json path
    #[arg(long)]
    pub branch_schemas: Option<PathBuf>,

    /// Deployed kafka-catalog.yaml path
    #[arg(long)]
    pub deployed_kafka: Option<PathBuf>,

    /// Deployed schemas-catalog.json path
    #[arg(long)]
    pub deployed_schemas: Option<PathBuf>,

    /// Catalog directory used when no branch catalog path is given
    #[arg(long, default_value = DEFAULT_CATALOG_DIR)]
    pub catalog_dir: PathBuf,

    /// YAML allow-list of approved ownership transfers
    #[arg(long)]
    pub allow_transfers: Option<PathBuf>,
}
