//! Command implementations for the catalog-guard CLI

pub mod aggregate;
pub mod completions;
pub mod helpers;
pub mod render;
pub mod validate;
pub mod version;
