//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("photogen").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("photogen").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--max-upload-bytes"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("photogen").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("photogen").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

#[test]
fn test_serve_without_api_key_fails_fast() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("photogen").unwrap();
    cmd.current_dir(&dir)
        .env("HOME", &dir)
        .env("OPENAI_API_KEY", "")
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
