//! Command-line surface of the binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("diagram-chat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--port")
                .and(predicate::str::contains("--data-dir"))
                .and(predicate::str::contains("--render-url")),
        );
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("diagram-chat")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_rejects_invalid_port() {
    let data_dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("diagram-chat")
        .unwrap()
        .args(["--port", "not-a-port", "--data-dir"])
        .arg(data_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
