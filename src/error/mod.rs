//! Error types and handling for catalog-guard
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors (environment, root, policy, metadata)
//! - [`input`]: Malformed declaration, schema and catalog documents
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod input;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for catalog-guard operations
#[derive(Error, Diagnostic, Debug)]
pub enum CatalogError {
    // Configuration errors
    #[error("domains/ directory not found under {path}")]
    #[diagnostic(
        code(catalog_guard::config::domains_dir_not_found),
        help("Run from the repository root or pass --root <dir>")
    )]
    DomainsDirNotFound { path: String },

    #[error("Invalid environment name '{name}': {reason}")]
    #[diagnostic(
        code(catalog_guard::config::invalid_environment),
        help("Use a plain environment name such as dev, test, qa or prod")
    )]
    InvalidEnvironment { name: String, reason: String },

    #[error("Domain '{domain}' has no declaration for environment '{environment}'")]
    #[diagnostic(code(catalog_guard::config::domain_not_found))]
    DomainNotFound { domain: String, environment: String },

    #[error("Cluster metadata '{key}' is not set ({origin})")]
    #[diagnostic(
        code(catalog_guard::config::missing_metadata),
        help("Export the variable or pass --metadata-file with all metadata fields")
    )]
    MissingMetadata { key: String, origin: String },

    #[error("Transfer policy not found: {path}")]
    #[diagnostic(code(catalog_guard::config::policy_not_found))]
    PolicyNotFound { path: String },

    #[error("Invalid transfer policy {path}: {reason}")]
    #[diagnostic(code(catalog_guard::config::invalid_policy))]
    InvalidPolicy { path: String, reason: String },

    // Malformed input errors
    #[error("Failed to parse declaration of domain '{domain}' ({path}): {reason}")]
    #[diagnostic(
        code(catalog_guard::input::declaration_parse_failed),
        help("Fix the YAML syntax; no catalog was written")
    )]
    DeclarationParseFailed {
        domain: String,
        path: String,
        reason: String,
    },

    #[error("Invalid JSON in schema of domain '{domain}' ({path}): {reason}")]
    #[diagnostic(code(catalog_guard::input::schema_parse_failed))]
    SchemaParseFailed {
        domain: String,
        path: String,
        reason: String,
    },

    #[error("Failed to parse catalog {path}: {reason}")]
    #[diagnostic(code(catalog_guard::input::catalog_parse_failed))]
    CatalogParseFailed { path: String, reason: String },

    #[error("Failed to parse metadata document {path}: {reason}")]
    #[diagnostic(code(catalog_guard::input::metadata_parse_failed))]
    MetadataParseFailed { path: String, reason: String },

    // Conflict violation
    #[error("Validation failed: {count} conflict(s) detected")]
    #[diagnostic(
        code(catalog_guard::validate::conflicts),
        help("Rename the resources or record the ownership transfer with --allow-transfers")
    )]
    ConflictsDetected { count: usize },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(catalog_guard::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(catalog_guard::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(catalog_guard::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(catalog_guard::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for CatalogError {
    fn from(err: walkdir::Error) -> Self {
        CatalogError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = CatalogError::ConflictsDetected { count: 2 };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("catalog_guard::validate::conflicts".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::IoError { .. }));
    }

    test_error_contains!(
        test_conflicts_detected_error,
        CatalogError::ConflictsDetected { count: 3 },
        "3 conflict(s)"
    );

    test_error_contains!(
        test_declaration_parse_failed_names_domain_and_file,
        input::declaration_parse_failed(
            "orders",
            "domains/orders/dev/kafka-request.yaml",
            "mapping values are not allowed"
        ),
        "orders",
        "domains/orders/dev/kafka-request.yaml",
        "mapping values"
    );

    test_error_contains!(
        test_missing_metadata_names_key,
        config::missing_metadata("KAFKA_CLUSTER_ID", "environment"),
        "KAFKA_CLUSTER_ID",
        "environment"
    );

    #[test]
    fn test_domains_dir_not_found() {
        let err = config::domains_dir_not_found("/repo");
        assert!(matches!(err, CatalogError::DomainsDirNotFound { .. }));
        assert!(err.to_string().contains("/repo"));
    }

    #[test]
    fn test_invalid_environment() {
        let err = config::invalid_environment("../prod", "must not contain path separators");
        assert!(matches!(err, CatalogError::InvalidEnvironment { .. }));
        assert!(err.to_string().contains("Invalid environment name"));
    }

    #[test]
    fn test_catalog_parse_failed() {
        let err = input::catalog_parse_failed("catalogs/dev/kafka-catalog.yaml", "bad indent");
        assert!(matches!(err, CatalogError::CatalogParseFailed { .. }));
        assert!(err.to_string().contains("Failed to parse catalog"));
    }

    #[test]
    fn test_file_write_failed() {
        let err = fs::write_failed("/path/to/file.txt", "disk full");
        assert!(matches!(err, CatalogError::FileWriteFailed { .. }));
        assert!(err.to_string().contains("disk full"));
    }
}
