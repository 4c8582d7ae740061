//! CLI smoke tests for the `mrd` binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// A command with config lookup pointed away from the user's real file.
fn mrd() -> Command {
    let mut cmd = Command::cargo_bin("mrd").unwrap();
    cmd.env("MERIDIAN_CONFIG", "/nonexistent/meridian-test.toml");
    cmd
}

fn write_abi(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("abi.json");
    std::fs::write(
        &path,
        r#"[
            {"type": "function", "name": "set",
             "inputs": [{"type": "int"}], "outputs": [{"type": "bool"}]},
            {"type": "readonly", "name": "get",
             "inputs": [], "outputs": [{"type": "int"}]}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn help_mentions_the_console() {
    mrd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("console"));
}

#[test]
fn missing_abi_file_is_a_startup_error() {
    mrd()
        .args(["console", "/no/such/abi.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read file"));
}

#[test]
fn malformed_abi_is_a_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abi.json");
    std::fs::write(&path, "{ not an abi").unwrap();

    mrd()
        .args(["console", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse ABI"));
}

#[test]
fn invalid_channel_is_a_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let abi = write_abi(&dir);

    mrd()
        .args(["console", abi.to_str().unwrap(), "--channel", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid channel id"));
}

#[test]
fn console_session_runs_to_farewell_without_a_node() {
    let dir = tempfile::tempdir().unwrap();
    let abi = write_abi(&dir);

    // 'abi' is handled locally, so no node needs to be listening.
    mrd()
        .args(["console", abi.to_str().unwrap()])
        .write_stdin("abi\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Functions:"))
        .stdout(predicate::str::contains("  set(int) -> bool"))
        .stdout(predicate::str::contains("ReadOnly Functions:"))
        .stdout(predicate::str::contains("  get() -> int"))
        .stdout(predicate::str::contains("catch you later~"));
}

#[test]
fn unreadable_key_file_is_a_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let abi = write_abi(&dir);

    mrd()
        .args([
            "console",
            abi.to_str().unwrap(),
            "--key-file",
            "/no/such/key.hex",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read key file"));
}

#[test]
fn completions_emit_a_script() {
    mrd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mrd"));
}
