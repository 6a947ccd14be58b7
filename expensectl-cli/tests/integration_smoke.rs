//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("expensectl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("expensectl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--uploads-dir"))
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("PGHOST"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("expensectl").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}

#[test]
fn test_serve_rejects_bad_database_url() {
    let mut cmd = Command::cargo_bin("expensectl").unwrap();
    cmd.arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .env("DATABASE_URL", "not a url");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid store connection settings"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("expensectl").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("expensectl"));
}
