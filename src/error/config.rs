//! Configuration errors

use super::CatalogError;

/// Creates a missing domains directory error
pub fn domains_dir_not_found(path: impl Into<String>) -> CatalogError {
    CatalogError::DomainsDirNotFound { path: path.into() }
}

/// Creates an invalid environment name error
pub fn invalid_environment(name: impl Into<String>, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidEnvironment {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a domain without declaration error
pub fn domain_not_found(domain: impl Into<String>, environment: impl Into<String>) -> CatalogError {
    CatalogError::DomainNotFound {
        domain: domain.into(),
        environment: environment.into(),
    }
}

/// Creates a missing cluster metadata error
pub fn missing_metadata(key: impl Into<String>, origin: impl Into<String>) -> CatalogError {
    CatalogError::MissingMetadata {
        key: key.into(),
        origin: origin.into(),
    }
}

/// Creates a transfer policy not found error
pub fn policy_not_found(path: impl Into<String>) -> CatalogError {
    CatalogError::PolicyNotFound { path: path.into() }
}

/// Creates an invalid transfer policy error
pub fn invalid_policy(path: impl Into<String>, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidPolicy {
        path: path.into(),
        reason: reason.into(),
    }
}
