//! Binary flag handling.

use std::process::Command;

fn edux() -> Command {
    Command::new(env!("CARGO_BIN_EXE_edux"))
}

#[test]
fn test_version_flag() {
    let output = edux()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("edux {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_options() {
    let output = edux().arg("--help").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--keep-course-depth"));
    assert!(stdout.contains("EDUX_START"));
}

#[test]
fn test_unknown_flag_exits_with_usage_error() {
    let output = edux()
        .arg("--sideways")
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown argument: --sideways"));
}
