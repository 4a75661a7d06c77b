//! Integration tests for the `value` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the sort, compare
//! and show subcommands through the actual binary, including stdin/stdout
//! piping, file I/O and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn value_cmd() -> Command {
    Command::cargo_bin("value").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Sort subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sort_stdin_to_stdout() {
    value_cmd()
        .arg("sort")
        .write_stdin(r#"[true,"b",3,null,1.5,"a",false]"#)
        .assert()
        .success()
        .stdout("[1.5,3,\"a\",\"b\",false,true,null]\n");
}

#[test]
fn sort_fixture_orders_every_kind() {
    let output = value_cmd()
        .args(["sort", "-i", &fixture("mixed.json")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sorted: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let expected: serde_json::Value = serde_json::from_str(
        r#"[1.5, 3, "a", "b", false, true, [1], [1, 2], {"a": 0}, {"b": 2, "a": 1}, null]"#,
    )
    .unwrap();
    assert_eq!(sorted, expected);
}

#[test]
fn sort_keeps_object_member_order() {
    value_cmd()
        .arg("sort")
        .write_stdin(r#"[{"z":1,"a":2}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"z":1,"a":2}"#));
}

#[test]
fn sort_pretty_output() {
    value_cmd()
        .args(["sort", "--pretty"])
        .write_stdin("[2,1]")
        .assert()
        .success()
        .stdout("[\n  1,\n  2\n]\n");
}

#[test]
fn sort_to_output_file() {
    let dir = std::env::temp_dir().join(format!("value-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("sorted.json");

    value_cmd()
        .args(["sort", "-o", out.to_str().unwrap()])
        .write_stdin(r#"["b","a"]"#)
        .assert()
        .success()
        .stdout("");

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, "[\"a\",\"b\"]\n");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn sort_reports_unwritable_output() {
    value_cmd()
        .args(["sort", "-o", "/nonexistent-dir/sorted.json"])
        .write_stdin("[1]")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to write file: /nonexistent-dir/sorted.json",
        ));
}

#[test]
fn show_reads_stdin_with_unicode() {
    value_cmd()
        .arg("show")
        .write_stdin(r#"["caf\u00e9", 1e300]"#)
        .assert()
        .success()
        .stdout("[\"café\",1e300]\n");
}

#[test]
fn sort_rejects_non_array() {
    value_cmd()
        .arg("sort")
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sort expects a JSON array, got map"));
}

#[test]
fn sort_rejects_invalid_json() {
    value_cmd()
        .arg("sort")
        .write_stdin("[1,")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON from <stdin>"));
}

#[test]
fn sort_rejects_oversized_integer() {
    value_cmd()
        .arg("sort")
        .write_stdin("[18446744073709551615]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not fit in a signed 64-bit integer"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Compare subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compare_ignores_member_order() {
    value_cmd()
        .args(["compare", &fixture("left.json"), &fixture("right.json")])
        .assert()
        .success()
        .stdout("equal\n");
}

#[test]
fn compare_less_and_greater() {
    value_cmd()
        .args(["compare", &fixture("left.json"), &fixture("greater.json")])
        .assert()
        .success()
        .stdout("less\n");

    value_cmd()
        .args(["compare", &fixture("greater.json"), &fixture("left.json")])
        .assert()
        .success()
        .stdout("greater\n");
}

#[test]
fn compare_missing_file() {
    value_cmd()
        .args(["compare", "/nonexistent/left.json", &fixture("left.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Show subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn show_renders_insertion_order() {
    value_cmd()
        .arg("show")
        .write_stdin(r#"{"z":[1,"x"],"a":null}"#)
        .assert()
        .success()
        .stdout("{z=[1,\"x\"];a=null}\n");
}

#[test]
fn show_from_file() {
    value_cmd()
        .args(["show", "-i", &fixture("right.json")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{size=3;"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_logs_to_stderr_only() {
    value_cmd()
        .args(["-v", "sort"])
        .env_remove("RUST_LOG")
        .write_stdin("[2,1]")
        .assert()
        .success()
        .stdout("[1,2]\n")
        .stderr(predicate::str::contains("sorting"));
}
