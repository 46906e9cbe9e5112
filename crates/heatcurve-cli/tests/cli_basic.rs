//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given config directory and return output.
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_heatcurve"))
        .args(args)
        .env("HEATCURVE_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_calc_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calc"]);
    assert_eq!(code, 0, "calc failed");
    assert!(stdout.contains("y = -0.5x + 35"), "{stdout}");
    assert!(stdout.contains("-0.5000"), "{stdout}");
    assert!(stdout.contains("~30.0°C"), "{stdout}");
}

#[test]
fn test_calc_extrapolates() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calc", "--outside", "30"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("~20.0°C"), "{stdout}");

    let (code, stdout, _) = run_cli(home.path(), &["calc", "--outside", "-20"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("~45.0°C"), "{stdout}");
}

#[test]
fn test_calc_non_numeric_is_zero() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calc", "--outside", "abc"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("~35.0°C"), "{stdout}");
}

#[test]
fn test_calc_degenerate_points_fail() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run_cli(
        home.path(),
        &["calc", "--warm-outside", "5", "--cold-outside", "5"],
    );
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("Point 1 and Point 2 must have different outside temperatures."),
        "{stderr}"
    );
}

#[test]
fn test_calc_json_report() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["calc", "--json", "--cold-outside", "-5", "--cold-flow", "37.5"],
    );
    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["equation"], "y = -0.5x + 35");
    assert_eq!(report["flow_temp"], 30.0);
    assert_eq!(report["note"], serde_json::Value::Null);
}

#[test]
fn test_calc_json_degenerate_report() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calc", "--json", "--cold-outside", "20"]);
    assert_eq!(code, 0);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["equation"], "Invalid");
    assert_eq!(report["flow_temp"], serde_json::Value::Null);
    assert_eq!(
        report["note"],
        "Point 1 and Point 2 must have different outside temperatures."
    );
}

#[test]
fn test_table() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["table", "--from", "-10", "--to", "20", "--step", "10"],
    );
    assert_eq!(code, 0);
    for expected in ["~40.0°C", "~35.0°C", "~30.0°C", "~25.0°C"] {
        assert!(stdout.contains(expected), "missing {expected} in {stdout}");
    }
}

#[test]
fn test_table_rejects_zero_step() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["table", "--step", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("step"), "{stderr}");
}

#[test]
fn test_config_set_get() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "set", "curve.cold_flow", "-3"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "curve.cold_flow"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "-3.0");
}

#[test]
fn test_config_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "get", "curve.missing"]);
    assert_eq!(code, 1);
    let (code, _, stderr) = run_cli(home.path(), &["config", "set", "curve.missing", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"), "{stderr}");
}

#[test]
fn test_config_defaults_feed_calc() {
    let home = tempfile::tempdir().unwrap();
    run_cli(home.path(), &["config", "set", "curve.outside", "0"]);
    let (code, stdout, _) = run_cli(home.path(), &["calc"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("~35.0°C"), "{stdout}");

    run_cli(home.path(), &["config", "reset"]);
    let (_, stdout, _) = run_cli(home.path(), &["calc"]);
    assert!(stdout.contains("~30.0°C"), "{stdout}");
}

#[test]
fn test_profile_export_import_apply() {
    let home = tempfile::tempdir().unwrap();
    let profile_path = home.path().join("ufh.json");
    let profile_arg = profile_path.to_str().unwrap();

    let (code, stdout, _) = run_cli(
        home.path(),
        &[
            "profile",
            "export",
            "ufh",
            "--output",
            profile_arg,
            "--warm-outside",
            "15",
            "--cold-outside",
            "-5",
            "--cold-flow",
            "35",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("y = -0.5x + 32.5"), "{stdout}");
    assert!(profile_path.exists());

    let (code, stdout, _) = run_cli(home.path(), &["profile", "import", profile_arg, "--apply"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Applied"), "{stdout}");

    let (_, stdout, _) = run_cli(home.path(), &["calc", "--outside", "0"]);
    assert!(stdout.contains("~32.5°C"), "{stdout}");
}

#[test]
fn test_profile_export_rejects_degenerate_points() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        home.path(),
        &["profile", "export", "flat", "--cold-outside", "20"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("different outside temperatures"), "{stderr}");
}

#[test]
fn test_calc_for_flow() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["calc", "--for-flow", "45"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Flow 45.0°C is reached at ~-20.0°C outside"), "{stdout}");

    let (code, stdout, _) = run_cli(
        home.path(),
        &["calc", "--cold-flow", "25", "--for-flow", "30"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("The curve is flat"), "{stdout}");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let home = tempfile::tempdir().unwrap();
    let (_, quiet_stdout, quiet_stderr) = run_cli(home.path(), &["calc"]);
    assert!(!quiet_stderr.contains("fitted heating curve"));

    let (code, stdout, stderr) = run_cli(home.path(), &["--verbose", "calc"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("fitted heating curve"), "{stderr}");
    assert_eq!(stdout, quiet_stdout);
}

#[test]
fn test_profile_export_rejects_infinite_points() {
    let home = tempfile::tempdir().unwrap();
    let profile_path = home.path().join("inf.json");
    let (code, _, stderr) = run_cli(
        home.path(),
        &[
            "profile",
            "export",
            "inf",
            "--output",
            profile_path.to_str().unwrap(),
            "--warm-outside",
            "Infinity",
        ],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("must be a finite number"), "{stderr}");
    assert!(!profile_path.exists());
}

#[test]
fn test_profile_export_rejects_path_names() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["profile", "export", "../escape"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("path separators"), "{stderr}");
    assert!(!home.path().parent().unwrap().join("escape.json").exists());
}
