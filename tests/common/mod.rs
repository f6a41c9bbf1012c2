//! Common test utilities for catalog-guard integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables read when rendering without a metadata file
pub const METADATA_VARS: [&str; 5] = [
    "KAFKA_CLUSTER_ID",
    "CONFLUENT_ENVIRONMENT_ID",
    "KAFKA_REST_ENDPOINT",
    "SCHEMA_REGISTRY_ID",
    "SCHEMA_REGISTRY_ENDPOINT",
];

/// A repository root with a `domains/` tree
pub struct TestRepo {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Create a repository with an empty `domains/` directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("domains")).expect("Failed to create domains directory");
        Self { temp, path }
    }

    /// Write a domain's declaration for one environment
    pub fn declare(&self, domain: &str, env: &str, yaml: &str) {
        self.write_file(&format!("domains/{domain}/{env}/kafka-request.yaml"), yaml);
    }

    /// Write a schema document for one domain and environment
    #[allow(dead_code)]
    pub fn schema(&self, domain: &str, env: &str, subject: &str, json: &str) {
        self.write_file(
            &format!("domains/{domain}/{env}/schemas/{subject}.avsc"),
            json,
        );
    }

    /// Write a file relative to the repository root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the repository root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Promote the current branch catalogs to the deployed location
    #[allow(dead_code)]
    pub fn deploy(&self, env: &str) {
        for file in ["kafka-catalog.yaml", "schemas-catalog.json"] {
            let branch = format!("catalogs/{env}/{file}");
            if self.file_exists(&branch) {
                let content = self.read_file(&branch);
                self.write_file(&format!("catalogs/{env}/.deployed/{file}"), &content);
            }
        }
    }

    /// A catalog-guard command rooted at this repository
    pub fn cmd(&self) -> Command {
        let mut cmd = catalog_guard_cmd();
        cmd.current_dir(&self.path).env_remove("CATALOG_GUARD_ROOT");
        for var in METADATA_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn catalog_guard_cmd() -> Command {
    Command::cargo_bin("catalog-guard").expect("catalog-guard binary")
}
