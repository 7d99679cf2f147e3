//! CLI integration tests for the `gantry` binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout
//! content, and stderr content.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gantry() -> Command {
    Command::cargo_bin("gantry").unwrap()
}

#[test]
fn help_exits_0_with_description() {
    gantry()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Typed decoding for captured Gantry REST payloads",
        ));
}

#[test]
fn decode_file_converts_dates_and_enums() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("connection.json");
    fs::write(
        &path,
        r#"{
            "lastUserAccess": "2024-05-12T08:15:30+00:00",
            "locationServiceData": {
                "serviceDefinitions": [{"status": "active", "inheritLevel": 5}]
            }
        }"#,
    )
    .unwrap();

    gantry()
        .args(["decode", "--type", "ConnectionData"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-12T08:15:30Z"))
        .stdout(predicate::str::contains(r#""status":1"#))
        .stdout(predicate::str::contains(r#""inheritLevel":5"#));
}

#[test]
fn decode_reads_stdin_when_no_file_given() {
    gantry()
        .args(["decode", "--type", "TaskAgentPool"])
        .write_stdin(r#"{"poolType": "deployment", "createdOn": 1704067200000}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""poolType":2"#))
        .stdout(predicate::str::contains("2024-01-01T00:00:00Z"));
}

#[test]
fn decode_collection_flag_handles_list_responses() {
    gantry()
        .args(["decode", "--type", "TaskAgentPool", "--collection"])
        .write_stdin(r#"[{"poolType": "automation"}, {"poolType": 2}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"[{"poolType":1},{"poolType":2}]"#));
}

#[test]
fn lenient_decode_keeps_going_and_warns_on_stderr() {
    gantry()
        .args(["decode", "--type", "ServiceDefinition"])
        .write_stdin(r#"{"status": "bogus", "inheritLevel": "collection"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":"bogus""#))
        .stdout(predicate::str::contains(r#""inheritLevel":4"#))
        .stderr(predicate::str::contains("is not a member of enum"));
}

#[test]
fn strict_decode_fails_with_exit_1() {
    gantry()
        .args(["decode", "--type", "ServiceDefinition", "--strict"])
        .write_stdin(r#"{"status": "bogus"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a member of enum"));
}

#[test]
fn unknown_type_fails_with_exit_2() {
    gantry()
        .args(["decode", "--type", "NoSuchType"])
        .write_stdin("{}")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown contract type"));
}

#[test]
fn invalid_json_fails_with_exit_2() {
    gantry()
        .args(["decode", "--type", "ConnectionData"])
        .write_stdin("{not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn types_lists_registered_contract_types() {
    gantry()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("ConnectionData"))
        .stdout(predicate::str::contains("lastUserAccess: date"))
        .stdout(predicate::str::contains(
            "serviceDefinitions: array of nested ServiceDefinition",
        ));
}

#[test]
fn enums_without_name_lists_registered_enums() {
    gantry()
        .arg("enums")
        .assert()
        .success()
        .stdout(predicate::str::contains("InheritLevel"))
        .stdout(predicate::str::contains("RoleScope"))
        .stdout(predicate::str::contains("TaskResult"));
}

#[test]
fn enums_value_without_name_fails_with_exit_2() {
    gantry()
        .args(["enums", "--value", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires an enum name"));
}

#[test]
fn enums_prints_member_table() {
    gantry()
        .args(["enums", "InheritLevel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("none = 0"))
        .stdout(predicate::str::contains("all = 7"));
}

#[test]
fn enums_describes_flag_combination() {
    gantry()
        .args(["enums", "InheritLevel", "--value", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collection | deployment"));
}

#[test]
fn enums_unknown_name_fails_with_exit_2() {
    gantry()
        .args(["enums", "NoSuchEnum"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown enum"));
}
