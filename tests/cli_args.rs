//! Runs the binary for the paths that exit before the terminal UI starts.

use std::process::Command;

fn user_entry_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_user-entry"))
}

#[test]
fn test_help_lists_options() {
    let output = user_entry_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--export"));
    assert!(stdout.contains("--strict-age"));
    assert!(stdout.contains("--lenient-age"));
}

#[test]
fn test_version_flag() {
    let output = user_entry_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_conflicting_age_flags_rejected() {
    let output = user_entry_cmd()
        .args(["--strict-age", "--lenient-age"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "got: {}", stderr);
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = user_entry_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "got: {}", stderr);
}
