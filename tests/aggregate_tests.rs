//! Integration tests for aggregate and aggregate-schemas

mod common;

use common::TestRepo;
use predicates::prelude::*;

const ORDERS: &str = "\
topics:
  - name: orders.created
    partitions: 6
schemas:
  - subject: orders.created-value
    schema_file: schemas/orders.created-value.avsc
access_config:
  - name: sa-orders
    role: DeveloperWrite
    topics: [orders.created]
";

const BILLING: &str = "\
topics:
  - name: billing.invoiced
";

#[test]
fn test_aggregate_merges_all_domains() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);
    repo.declare("billing", "dev", BILLING);
    repo.schema("orders", "dev", "orders.created-value", r#"{"type": "string"}"#);

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing domain: billing"))
        .stdout(predicate::str::contains("Processing domain: orders"))
        .stdout(predicate::str::contains("Aggregated catalog written to:"))
        .stdout(predicate::str::contains("Catalog digest: blake3:"));

    let catalog = repo.read_file("catalogs/dev/kafka-catalog.yaml");
    assert!(catalog.contains("orders.created"));
    assert!(catalog.contains("billing.invoiced"));
    assert!(catalog.contains("owning_domain: orders"));
    assert!(catalog.contains("owning_domain: billing"));
    assert!(catalog.contains("sa-orders"));
}

#[test]
fn test_aggregate_only_reads_requested_environment() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);
    repo.declare("billing", "prod", BILLING);

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success();

    let catalog = repo.read_file("catalogs/dev/kafka-catalog.yaml");
    assert!(catalog.contains("orders.created"));
    assert!(!catalog.contains("billing.invoiced"));
    assert!(!repo.file_exists("catalogs/prod/kafka-catalog.yaml"));
}

#[test]
fn test_aggregate_empty_environment_succeeds() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);

    repo.cmd()
        .args(["aggregate", "--env", "qa"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No kafka-request.yaml files found"));

    assert!(repo.file_exists("catalogs/qa/kafka-catalog.yaml"));
}

#[test]
fn test_aggregate_malformed_declaration_fails() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);
    repo.declare("billing", "dev", "topics: [unclosed\n");

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("billing"))
        .stderr(predicate::str::contains("kafka-request.yaml"));

    assert!(!repo.file_exists("catalogs/dev/kafka-catalog.yaml"));
}

#[test]
fn test_aggregate_empty_declaration_is_valid() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", "");

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success();

    let catalog = repo.read_file("catalogs/dev/kafka-catalog.yaml");
    assert!(catalog.contains("orders"));
}

#[test]
fn test_aggregate_warns_on_missing_schema_file() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success()
        .stderr(predicate::str::contains("orders.created-value.avsc"));
}

#[test]
fn test_aggregate_is_reproducible() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);
    repo.declare("billing", "dev", BILLING);

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success();
    let first = repo.read_file("catalogs/dev/kafka-catalog.yaml");

    repo.cmd()
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success();
    assert_eq!(first, repo.read_file("catalogs/dev/kafka-catalog.yaml"));
}

#[test]
fn test_aggregate_custom_output_dir() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);

    repo.cmd()
        .args(["aggregate", "--env", "dev", "--output-dir", "build"])
        .assert()
        .success();

    assert!(repo.file_exists("build/dev/kafka-catalog.yaml"));
}

#[test]
fn test_aggregate_with_root_option() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);
    let elsewhere = tempfile::TempDir::new().unwrap();

    common::catalog_guard_cmd()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(&repo.path)
        .args(["aggregate", "--env", "dev"])
        .assert()
        .success();

    assert!(repo.file_exists("catalogs/dev/kafka-catalog.yaml"));
}

#[test]
fn test_aggregate_without_domains_dir_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    common::catalog_guard_cmd()
        .current_dir(temp.path())
        .env_remove("CATALOG_GUARD_ROOT")
        .args(["aggregate", "--env", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("domains/ directory not found"));
}

#[test]
fn test_aggregate_schemas_collects_documents() {
    let repo = TestRepo::new();
    repo.declare("orders", "dev", ORDERS);
    repo.schema("orders", "dev", "orders.created-value", r#"{"type": "string"}"#);
    repo.schema("billing", "dev", "billing.invoiced-value", r#"{"type": "long"}"#);

    repo.cmd()
        .args(["aggregate-schemas", "--env", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 schema files for dev"))
        .stdout(predicate::str::contains("Schemas catalog written to:"));

    let catalog = repo.read_file("catalogs/dev/schemas-catalog.json");
    let json: serde_json::Value = serde_json::from_str(&catalog).unwrap();
    assert_eq!(json["environment"], "dev");
    assert_eq!(json["schemas"].as_array().unwrap().len(), 2);
    assert!(catalog.contains("orders.created-value"));
    assert!(catalog.contains("billing.invoiced-value"));
}

#[test]
fn test_aggregate_schemas_empty_environment() {
    let repo = TestRepo::new();

    repo.cmd()
        .args(["aggregate-schemas", "--env", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No schema files found"));

    let json: serde_json::Value =
        serde_json::from_str(&repo.read_file("catalogs/dev/schemas-catalog.json")).unwrap();
    assert!(json["schemas"].as_array().unwrap().is_empty());
}

#[test]
fn test_aggregate_schemas_rejects_invalid_json() {
    let repo = TestRepo::new();
    repo.schema("orders", "dev", "orders.created-value", "{not json");

    repo.cmd()
        .args(["aggregate-schemas", "--env", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("orders.created-value.avsc"));
}
