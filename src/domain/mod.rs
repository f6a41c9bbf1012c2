//! Domain models for catalog-guard
//!
//! Pure domain objects: environments, the resources a domain declares, and the
//! ownership wrapper every aggregated resource is stored in.

pub mod environment;
pub mod owned;
pub mod resource;

pub use environment::Environment;
pub use owned::{Identified, Owned, ResourceKind};
pub use resource::{AccessEntry, DomainDeclaration, SchemaDeclaration, Topic};
