use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("mojipad")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal emoji pad"))
        .stdout(predicate::str::contains("--columns"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_prints_package_version() {
    Command::cargo_bin("mojipad")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_generate_for_bash() {
    Command::cargo_bin("mojipad")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mojipad"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    Command::cargo_bin("mojipad")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_columns_rejects_non_numeric_value() {
    Command::cargo_bin("mojipad")
        .unwrap()
        .args(["--columns", "many"])
        .assert()
        .failure();
}
