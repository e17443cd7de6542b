use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the bqx binary
fn bqx() -> Command {
    Command::cargo_bin("bqx").expect("Failed to find bqx binary")
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_suite() {
    bqx()
        .arg("check")
        .arg(fixture_path("extract_checks.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("extract_checks"))
        .stdout(predicate::str::contains("Expectations: 4"))
        .stdout(predicate::str::contains("categorical_membership"))
        .stdout(predicate::str::contains("min_age_exp"));
}

#[test]
fn test_check_toml_suite() {
    bqx()
        .arg("check")
        .arg(fixture_path("suite.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("toml_checks"))
        .stdout(predicate::str::contains("Expectations: 2"));
}

#[test]
fn test_check_malformed_rule_fails() {
    bqx()
        .arg("check")
        .arg(fixture_path("bad_suite.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_check_missing_file_fails() {
    bqx()
        .arg("check")
        .arg("tests/fixtures/no_such_suite.yml")
        .assert()
        .failure();
}

#[test]
fn test_check_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("suite.ini");
    fs::write(&path, "name = nope").unwrap();

    bqx()
        .arg("check")
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_passing_dataset() {
    bqx()
        .arg("validate")
        .arg(fixture_path("extract_checks.yml"))
        .arg("--data")
        .arg(fixture_path("insurance.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Meta-validation PASSED"))
        .stdout(predicate::str::contains("Failures:     0"));
}

#[test]
fn test_validate_failing_dataset_exits_nonzero() {
    // The fixture's minimum age is 19; the failing suite demands >= 21.
    bqx()
        .arg("validate")
        .arg(fixture_path("failing_checks.yml"))
        .arg("--data")
        .arg(fixture_path("insurance.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Meta-validation FAILED"))
        .stdout(predicate::str::contains("min_age_exp"));
}

#[test]
fn test_validate_json_output() {
    bqx()
        .arg("validate")
        .arg(fixture_path("extract_checks.yml"))
        .arg("--data")
        .arg(fixture_path("insurance.json"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"success\""))
        .stdout(predicate::str::contains("\"results\""));
}

#[test]
fn test_validate_missing_column_reports_failure() {
    let dir = TempDir::new().unwrap();
    let suite = dir.path().join("suite.yml");
    fs::write(
        &suite,
        r#"
name: absent_column
expectations:
  - column: bmi
    rule:
      type: min_bound
      low: 10.0
      high: 20.0
"#,
    )
    .unwrap();

    bqx()
        .arg("validate")
        .arg(suite.to_str().unwrap())
        .arg("--data")
        .arg(fixture_path("insurance.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_validate_invalid_dataset_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "[1, 2, 3]").unwrap();

    bqx()
        .arg("validate")
        .arg(fixture_path("extract_checks.yml"))
        .arg("--data")
        .arg(data.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}
