//! Integration tests for the mecwise binary.
//!
//! These tests verify end-to-end behavior including:
//! - Reading answers from a file and from stdin
//! - JSON, CSV and text output
//! - Config file handling
//! - Error reporting for invalid input

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create an isolated config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with a config home that has no config file
fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mecwise"));
    cmd.env("XDG_CONFIG_HOME", home).env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is not valid JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("WHO MEC contraceptive eligibility"));
}

#[test]
fn test_evaluate_json_from_file() {
    let temp_dir = setup_test_dir();
    let input = write_input(temp_dir.path(), "answers.json", r#"{"age": 30}"#);

    let output = cli(temp_dir.path())
        .args(["evaluate", "--format", "json", "--date", "2024-06-01", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["mecResults"].as_array().unwrap().len(), 15);
    let avoid: Vec<&str> = json["avoid"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(avoid.contains(&"h"));
    assert!(avoid.contains(&"o"));
}

#[test]
fn test_evaluate_reads_stdin() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path())
        .args(["evaluate", "--format", "json"])
        .write_stdin("{}")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["suggested"].as_array().unwrap().len(), 15);
    assert!(json["avoid"].as_array().unwrap().is_empty());
}

#[test]
fn test_evaluate_text_output() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("evaluate")
        .write_stdin(r#"{"age": 16}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("MEC EVALUATION"))
        .stdout(predicate::str::contains("bone density"));
}

#[test]
fn test_evaluate_csv_output() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["evaluate", "--format", "csv"])
        .write_stdin(r#"{"age": 25}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("method,name,score,category,reasons"));
}

#[test]
fn test_evaluate_rejects_invalid_json() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("evaluate")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Json"));
}

#[test]
fn test_fab_pregnant_not_applicable() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path())
        .args(["fab", "--format", "json"])
        .write_stdin(r#"{"fab-currently-pregnant": "yes", "fab-irregular-bleeding": "yes"}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["notApplicable"], true);
    assert!(json["sym"].is_null());
    assert!(json["cal"].is_null());
}

#[test]
fn test_fab_csv_is_rejected() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["fab", "--format", "csv"])
        .write_stdin("{}")
        .assert()
        .failure();
}

#[test]
fn test_personalize_json() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path())
        .args(["personalize", "--format", "json"])
        .write_stdin(
            r#"{"eligibleMethods": ["a", "c", "d", "j"], "filters": {"okayWithIrregularPeriods": false}}"#,
        )
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["recommended"], serde_json::json!(["a", "j"]));
    assert_eq!(json["eliminated"].as_array().unwrap().len(), 2);
}

#[test]
fn test_personalize_rejects_invalid_bmi() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("personalize")
        .write_stdin(r#"{"eligibleMethods": ["a"], "filters": {"bmi": 150}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidBmi"));
}

#[test]
fn test_personalize_rejects_non_array() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("personalize")
        .write_stdin(r#"{"eligibleMethods": "a"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidEligibleMethods"));
}

#[test]
fn test_recommend_chains_engines() {
    let temp_dir = setup_test_dir();
    let input = write_input(
        temp_dir.path(),
        "request.json",
        r#"{"answers": {"age": 30}, "filters": {"wantsFuturePregnancy": true}}"#,
    );

    let output = cli(temp_dir.path())
        .args(["recommend", "--format", "json", "--date", "2024-06-01", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["mec"]["mecResults"].as_array().unwrap().len(), 15);

    let recommended: Vec<&str> = json["personalization"]["recommended"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    // Sterilization is MEC 3 at 30, so never reaches personalization
    assert!(!recommended.contains(&"h"));
    assert!(!recommended.contains(&"o"));
    assert!(recommended.contains(&"j"));
}

#[test]
fn test_rules_csv_lists_effects() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["rules", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rule_id,section,priority,methods,score,reason"))
        .stdout(predicate::str::contains("enzyme-inducing-anticonvulsants"));
}

#[test]
fn test_methods_text_lists_all_keys() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("methods")
        .assert()
        .success()
        .stdout(predicate::str::contains("a  Combined oral contraceptive"))
        .stdout(predicate::str::contains("o  "));
}

#[test]
fn test_config_file_sets_default_format() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("mecwise");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[output]\nformat = \"json\"\npretty = false\n",
    )
    .unwrap();

    let output = cli(temp_dir.path())
        .arg("methods")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout_json(stdout.as_bytes()).as_array().unwrap().len(), 15);
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

    cli(temp_dir.path())
        .args(["methods", "--format", "text", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Female sterilization"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["methods", "--config"])
        .arg(temp_dir.path().join("missing.toml"))
        .assert()
        .failure();
}
