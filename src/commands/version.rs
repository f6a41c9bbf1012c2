//! Version command implementation

use crate::aggregate::discovery::DECLARATION_FILE;
use crate::catalog::store::{KAFKA_CATALOG_FILE, SCHEMA_CATALOG_FILE};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("catalog-guard {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("File layout:");
    println!("  Declarations: domains/<domain>/<env>/{DECLARATION_FILE}");
    println!("  Catalogs: <catalog-dir>/<env>/{KAFKA_CATALOG_FILE}, {SCHEMA_CATALOG_FILE}");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
