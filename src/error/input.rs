//! Malformed input errors

use super::CatalogError;

/// Creates a declaration parse failed error
pub fn declaration_parse_failed(
    domain: impl Into<String>,
    path: impl Into<String>,
    reason: impl Into<String>,
) -> CatalogError {
    CatalogError::DeclarationParseFailed {
        domain: domain.into(),
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a schema document parse failed error
pub fn schema_parse_failed(
    domain: impl Into<String>,
    path: impl Into<String>,
    reason: impl Into<String>,
) -> CatalogError {
    CatalogError::SchemaParseFailed {
        domain: domain.into(),
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a catalog parse failed error
pub fn catalog_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CatalogError {
    CatalogError::CatalogParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a metadata document parse failed error
pub fn metadata_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CatalogError {
    CatalogError::MetadataParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
