use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the prolayout binary.
#[allow(deprecated)]
fn prolayout_cmd() -> Command {
    Command::cargo_bin("prolayout").unwrap()
}

#[test]
fn help_works() {
    prolayout_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn explain_known_code() {
    prolayout_cmd()
        .args(["explain", "directory_not_allowed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory Not Allowed"));
}

#[test]
fn explain_runtime_check_covers_both_pattern_kinds() {
    prolayout_cmd()
        .args(["explain", "tool.runtime"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Pattern [tool.runtime / invalid_pattern]"))
        .stdout(predicate::str::contains("directory name patterns and file name patterns"));
}

#[test]
fn explain_unknown_identifier_exits_one() {
    prolayout_cmd()
        .args(["explain", "nope.nothing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available check_ids:"));
}

#[test]
fn rejects_unknown_log_level() {
    prolayout_cmd()
        .args(["--log-level", "loud", "validate"])
        .assert()
        .failure();
}
