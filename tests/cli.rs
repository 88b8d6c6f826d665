//! End-to-end tests for the one-shot CLI modes

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn medterm() -> Command {
    let mut cmd = Command::cargo_bin("medterm").unwrap();
    // Keep the oracle unconfigured regardless of the host environment
    cmd.env_remove("ANTHROPIC_API_KEY");
    cmd
}

#[test]
fn suggest_prints_prefix_match_first() {
    medterm()
        .args(["--suggest", "myocar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("myocardial infarction"));
}

#[test]
fn suggest_with_empty_query_prints_nothing() {
    medterm()
        .args(["--suggest", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn suggest_respects_system_filter() {
    medterm()
        .args(["--suggest", "frac", "--system", "Neurology"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fracture").not());
}

#[test]
fn unknown_system_is_an_error() {
    medterm()
        .args(["--suggest", "a", "--system", "cardiology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown body system"));
}

#[test]
fn suggest_and_explain_conflict() {
    medterm()
        .args(["--suggest", "a", "--explain", "stroke"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn explain_without_api_key_reports_not_configured() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[oracle]\nmodel = \"claude-3-5-haiku-latest\"").unwrap();

    medterm()
        .args(["--explain", "stroke"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("oracle not configured"));
}

#[test]
fn invalid_config_file_is_an_error() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[oracle\nbroken =").unwrap();

    medterm()
        .args(["--suggest", "a"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn help_mentions_one_shot_flags() {
    medterm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--suggest"))
        .stdout(predicate::str::contains("--explain"));
}
