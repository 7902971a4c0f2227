//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use similar_asserts::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BASE: &str = "a:\n  x: 1\n";
const CHANGES: &str = "global:\n  z: 0\nhosts:\n  a:\n    y: 2\n  b:\n    y: 3\n";

fn confgen(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("confgen"));
    cmd.current_dir(dir)
        .env_remove("CONFGEN_INPUT")
        .env_remove("CONFGEN_OUTPUT")
        .env_remove("CONFGEN_MODE")
        .env_remove("CONFGEN_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    confgen(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("confgen"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    confgen(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apply keyed changesets"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("comments"));
}

#[test]
fn test_apply_merge_updates_output_in_place() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", CHANGES);
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .arg("apply")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(read(&output), "a:\n  x: 1\n  z: 0\n  y: 2\nb:\n  z: 0\n  y: 3\n".to_string());
    assert_eq!(read(&input), CHANGES.to_string());
}

#[test]
fn test_baselist_alias_merges() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", CHANGES);
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .arg("baselist")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(read(&output).contains("b:\n  z: 0\n  y: 3\n"));
}

#[test]
fn test_apply_replace_from_env() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", CHANGES);
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .arg("apply")
        .env("CONFGEN_INPUT", &input)
        .env("CONFGEN_OUTPUT", &output)
        .env("CONFGEN_MODE", "replace")
        .assert()
        .success();

    assert_eq!(read(&output), "a:\n  z: 0\n  y: 2\nb:\n  z: 0\n  y: 3\n".to_string());
}

#[test]
fn test_apply_filter_keeps_listed_hosts() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "keep.yaml", "hosts:\n  a: {}\n");
    let output = write(&tmp, "hosts.yaml", "a: {}\nb:\n  x: 1\nc: {}\n");

    confgen(tmp.path())
        .args(["apply", "--mode", "filter", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(read(&output), "a: {}\n".to_string());
}

#[test]
fn test_apply_delete_ignores_missing_hosts() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "drop.yaml", "hosts:\n  b:\n  nothere:\n");
    let output = write(&tmp, "hosts.yaml", "a:\n  x: 1\nb:\n  x: 2\n");

    confgen(tmp.path())
        .args(["apply", "-m", "delete", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(read(&output), "a:\n  x: 1\n".to_string());
}

#[test]
fn test_apply_add_conflict_warns_and_overwrites() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", "hosts:\n  a:\n    y: 2\n");
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .args(["apply", "-m", "add", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read(&output), "a:\n  y: 2\n".to_string());
}

#[test]
fn test_apply_type_mismatch_leaves_output_untouched() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", "hosts:\n  a:\n    y: 2\n  b: 5\n");
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .arg("apply")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type mismatch at 'hosts.b'"));

    assert_eq!(read(&output), BASE.to_string());
}

#[test]
fn test_apply_rejects_invalid_mode() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", CHANGES);
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .args(["apply", "-m", "upsert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("upsert"));
}

#[test]
fn test_apply_stdout_does_not_write() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", CHANGES);
    let output = write(&tmp, "hosts.yaml", BASE);

    confgen(tmp.path())
        .args(["apply", "--stdout", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("b:\n  z: 0\n  y: 3"));

    assert_eq!(read(&output), BASE.to_string());
}

#[test]
fn test_apply_mode_from_discovered_config() {
    let tmp = TempDir::new().expect("tmp");
    write(&tmp, "confgen.toml", "mode = 'delete'\n");
    let input = write(&tmp, "changes.yaml", "hosts:\n  a: {}\n");
    let output = write(&tmp, "hosts.yaml", "a: {}\nb: {}\n");

    confgen(tmp.path())
        .arg("apply")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(read(&output), "b: {}\n".to_string());
}

#[test]
fn test_cli_mode_beats_config_file() {
    let tmp = TempDir::new().expect("tmp");
    write(&tmp, "confgen.toml", "mode = 'delete'\n");
    let input = write(&tmp, "changes.yaml", "hosts:\n  a: {y: 1}\n");
    let output = write(&tmp, "hosts.yaml", "a: {}\nb: {}\n");

    confgen(tmp.path())
        .args(["apply", "-m", "merge", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(read(&output), "a:\n  y: 1\nb: {}\n".to_string());
}

#[test]
fn test_apply_json_documents() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.json", r#"{"global": {"z": 0}, "hosts": {"a": {"y": 2}}}"#);
    let output = write(&tmp, "hosts.json", r#"{"a": {"x": 1}}"#);

    confgen(tmp.path())
        .arg("apply")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let written: serde_json::Value = serde_json::from_str(&read(&output)).expect("json output");
    assert_eq!(written, serde_json::json!({"a": {"x": 1, "z": 0, "y": 2}}));
}

#[test]
fn test_apply_into_empty_toml_document() {
    let tmp = TempDir::new().expect("tmp");
    let input = write(&tmp, "changes.yaml", CHANGES);
    let output = write(&tmp, "hosts.toml", "");

    confgen(tmp.path())
        .args(["apply", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-f")
        .arg("toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML syntax"));

    // Changeset is YAML, so the format is left to the extensions.
    confgen(tmp.path()).args(["apply", "-i"]).arg(&input).arg("-o").arg(&output).assert().success();
    let written: toml::Value = toml::from_str(&read(&output)).expect("toml output");
    assert_eq!(written["b"]["y"].as_integer(), Some(3));
}

#[test]
fn test_comments_postpone_file_to_stdout() {
    let tmp = TempDir::new().expect("tmp");
    let path = write(&tmp, "hosts.yaml", "# note\nx: 1\ny: 2\n");

    confgen(tmp.path())
        .args(["comments", "postpone"])
        .arg(&path)
        .assert()
        .success()
        .stdout("x: 1\n# note\ny: 2\n");
}

#[test]
fn test_comments_prepone_from_stdin() {
    let tmp = TempDir::new().expect("tmp");
    confgen(tmp.path())
        .args(["comments", "prepone", "-"])
        .write_stdin("x: 1\n# note\ny: 2\n")
        .assert()
        .success()
        .stdout("# note\nx: 1\ny: 2\n");
}

#[test]
fn test_comments_round_trip_through_files() {
    let tmp = TempDir::new().expect("tmp");
    let original =
        "# web tier\nweb:\n  # listen port\n  port: 80\n\n# db tier\ndb:\n  port: 5432\n";
    let source = write(&tmp, "hosts.yaml", original);
    let postponed = tmp.path().join("postponed.yaml");
    let restored = tmp.path().join("restored.yaml");

    confgen(tmp.path())
        .args(["comments", "postpone"])
        .arg(&source)
        .arg("-o")
        .arg(&postponed)
        .assert()
        .success();
    confgen(tmp.path())
        .args(["comments", "prepone"])
        .arg(&postponed)
        .arg("-o")
        .arg(&restored)
        .assert()
        .success();

    assert_eq!(read(&restored), original.to_string());
}

#[test]
fn test_comments_strip_with_marker() {
    let tmp = TempDir::new().expect("tmp");
    let path = write(&tmp, "app.ini", "; header\n[main]\n\nkey=1\n; trailing\n");

    confgen(tmp.path())
        .args(["comments", "strip", "--marker", ";"])
        .arg(&path)
        .assert()
        .success()
        .stdout("[main]\nkey=1\n");
}

#[test]
fn test_comments_marker_from_config() {
    let tmp = TempDir::new().expect("tmp");
    write(&tmp, "confgen.yaml", "comment_marker: '//'\n");
    let path = write(&tmp, "doc.txt", "// c\nline\n");

    confgen(tmp.path()).args(["comments", "strip"]).arg(&path).assert().success().stdout("line\n");
}
