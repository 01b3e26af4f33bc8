//! End-to-end tests that invoke the compiled `flagpatch` binary.

use assert_cmd::Command;
use flagpatch_test_utils::{TESTER_HEADER, TESTER_HEADER_ENABLED, TestHeader};
use predicates::prelude::*;

/// Get a Command for the flagpatch binary with a clean environment.
fn flagpatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("flagpatch").expect("Failed to find flagpatch binary");
    cmd.env_remove("RUST_LOG").env_remove("FLAGPATCH_CONFIG");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_help_lists_commands() {
    flagpatch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("enable"))
        .stdout(predicate::str::contains("disable"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_version_output() {
    flagpatch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flagpatch"));
}

// ============================================================================
// Default invocation (original one-shot behavior)
// ============================================================================

#[test]
fn test_no_args_enables_default_header() {
    let fixture = TestHeader::new();

    flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    fixture.assert_content(TESTER_HEADER_ENABLED);
}

#[test]
fn test_second_run_is_noop() {
    let fixture = TestHeader::new();

    for _ in 0..2 {
        flagpatch_cmd().current_dir(fixture.test_dir()).assert().success();
    }

    fixture.assert_content(TESTER_HEADER_ENABLED);
}

#[test]
fn test_missing_header_fails_without_creating_file() {
    let fixture = TestHeader::without_header();

    flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot find header file"));

    assert!(!fixture.exists());
    assert!(fixture.include_entries().is_empty());
}

// ============================================================================
// Subcommands and options
// ============================================================================

#[test]
fn test_dry_run_prints_diff_only() {
    let fixture = TestHeader::new();

    flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .args(["enable", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+#define TESTENABLE"))
        .stdout(predicate::str::contains("-// #define TESTS"));

    fixture.assert_content(TESTER_HEADER);
}

#[test]
fn test_disable_round_trip() {
    let fixture = TestHeader::with_content(TESTER_HEADER_ENABLED);

    flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .arg("disable")
        .assert()
        .success()
        .stdout(predicate::str::contains("Disabled"));

    fixture.assert_content(TESTER_HEADER);
}

#[test]
fn test_header_and_flag_options() {
    let fixture = TestHeader::with_content("// #define TESTS\n// #define TRACE\n");

    flagpatch_cmd()
        .current_dir(fixture.root())
        .args(["--header", "include/tester.h", "-f", "TRACE", "enable"])
        .assert()
        .success();

    fixture.assert_content("// #define TESTS\n#define TRACE\n");
}

#[test]
fn test_config_file_in_working_directory() {
    let fixture = TestHeader::new();
    fixture.write_file(
        "flagpatch.toml",
        "header = \"include/tester.h\"\nmarkers = [\"TESTS\"]\n",
    );

    flagpatch_cmd().current_dir(fixture.root()).assert().success();

    let content = fixture.read();
    assert!(content.contains("\n#define TESTS\n"));
    assert!(content.contains("// #define TESTENABLE"));
}

#[test]
fn test_status_json() {
    let fixture = TestHeader::new();

    let output = flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .args(["status", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let markers = value["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m["state"] == "disabled"));
}

#[test]
fn test_enable_json_report() {
    let fixture = TestHeader::new();

    let output = flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .args(["enable", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["written"], true);
    assert_eq!(value["direction"], "enable");
    assert_eq!(value["changes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_flag_name_fails() {
    let fixture = TestHeader::new();

    flagpatch_cmd()
        .current_dir(fixture.test_dir())
        .args(["-f", "BAD NAME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid marker"));

    fixture.assert_content(TESTER_HEADER);
}
