//! End-to-end tests for the `argseam` binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout
//! content, and stderr content.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn argseam() -> Command {
    cargo_bin_cmd!("argseam")
}

fn json_stdout(assert: assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    serde_json::from_str(&stdout).expect("JSON stdout")
}

#[test]
fn help_exits_0_with_description() {
    argseam()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword boundary"));
}

#[test]
fn resolves_a_mixed_sequence() {
    argseam()
        .args(["--mono", "-h,--help", "--pair", "--limit"])
        .args(["--", "-h", "--limit", "2", "copy", "--infile=data.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boundary: 3"))
        .stdout(predicate::str::contains("inner: copy --infile=data.csv"));
}

#[test]
fn resolution_failure_exits_1_with_reason_on_stderr() {
    argseam()
        .args(["--pair", "--limit", "--", "--limit"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "expected value for paired keyword '--limit' at position 0",
        ));
}

#[test]
fn unrecognized_keyword_exits_1() {
    argseam()
        .args(["--mono", "-h", "--", "--frobnicate", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unrecognized term '--frobnicate'"));
}

#[test]
fn json_success_reports_both_segments() {
    let assert = argseam()
        .args(["--json", "--pair", "--limit", "--", "--limit=2", "foo"])
        .assert()
        .success();

    let value = json_stdout(assert);
    assert_eq!(value["boundary"], 1);
    assert_eq!(value["outer"][0], "--limit=2");
    assert_eq!(value["inner"][0], "foo");
}

#[test]
fn json_failure_reports_kind_and_position() {
    let assert = argseam()
        .args(["--json", "--pair", "--limit", "--", "--limit"])
        .assert()
        .failure()
        .code(1);

    let value = json_stdout(assert);
    assert_eq!(value["error"]["kind"], "missing_value");
    assert_eq!(value["error"]["position"], 0);
}

#[test]
fn keyword_lists_load_from_a_spec_file() {
    let mut file = NamedTempFile::new().expect("create temp spec file");
    writeln!(file, "mono = \"-h,--help\"").unwrap();
    writeln!(file, "pair = \"--limit\"").unwrap();

    argseam()
        .arg("--spec")
        .arg(file.path())
        .args(["--", "--limit", "2", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boundary: 2"));
}

#[test]
fn cli_lists_override_the_spec_file() {
    let mut file = NamedTempFile::new().expect("create temp spec file");
    writeln!(file, "pair = \"--limit\"").unwrap();

    // --pair on the command line replaces the file's unary list, so
    // --limit is no longer declared.
    argseam()
        .arg("--spec")
        .arg(file.path())
        .args(["--pair", "--depth", "--", "--limit", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unrecognized term '--limit'"));
}

#[test]
fn duplicate_declaration_in_spec_file_exits_2() {
    let mut file = NamedTempFile::new().expect("create temp spec file");
    writeln!(file, "mono = \"--help\"").unwrap();
    writeln!(file, "pair = \"--help\"").unwrap();

    argseam()
        .arg("--spec")
        .arg(file.path())
        .args(["--", "foo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("duplicate declaration"));
}

#[test]
fn missing_spec_file_exits_2() {
    argseam()
        .args(["--spec", "/nonexistent/spec.toml", "--", "foo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to read spec file"));
}

#[test]
fn duplicate_declaration_across_cli_lists_exits_2() {
    argseam()
        .args(["--mono", "--help", "--pair", "--help", "--", "foo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("duplicate declaration"));
}
