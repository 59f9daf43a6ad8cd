//! CLI E2E smoke tests: exit codes and output shape of each subcommand.

use std::io;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fieldcheck"));
    command.args(args);
    for (key, _) in std::env::vars() {
        if key.starts_with("FIELDCHECK_") {
            command.env_remove(key);
        }
    }
    command.output()
}

fn stdout_json(output: &Output) -> io::Result<serde_json::Value> {
    serde_json::from_slice(&output.stdout).map_err(io::Error::other)
}

#[test]
fn version_flag_prints_binary_name() -> io::Result<()> {
    let output = run_cli(&["--version"])?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("fieldcheck "));
    Ok(())
}

#[test]
fn compare_reports_both_suites() -> io::Result<()> {
    let output = run_cli(&["compare", "--iterations", "3"])?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  Gamer: Field 'username' in class Gamer cannot be null.\n"));
    assert!(stdout.contains("constructor:\n"));
    assert!(stdout.contains("verdict: "));
    Ok(())
}

#[test]
fn compare_showcase_times_hand_written_planes() -> io::Result<()> {
    let output = run_cli(&["compare", "--samples", "showcase"])?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hand-written:\n"));
    assert!(stdout.contains("  Plane (Airbus A-320): passed\n"));
    assert!(!stdout.contains("constructor:\n"));
    Ok(())
}

#[test]
fn compare_json_lists_messages_in_sample_order() -> io::Result<()> {
    let output = run_cli(&["--output", "json", "compare", "--iterations", "1"])?;
    assert_eq!(output.status.code(), Some(0));

    let value = stdout_json(&output)?;
    assert_eq!(value.get("status"), Some(&serde_json::json!("ok")));
    let subjects: Vec<&str> = value
        .pointer("/report/declared/outcomes")
        .and_then(serde_json::Value::as_array)
        .map(|outcomes| {
            outcomes
                .iter()
                .filter_map(|outcome| outcome.get("subject").and_then(serde_json::Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(subjects, ["Gamer", "Item", "Plane"]);
    Ok(())
}

#[test]
fn check_exit_codes_follow_outcome() -> io::Result<()> {
    let valid = run_cli(&["check", "gamer", "--data", r#"{"username":"neo","age":30}"#])?;
    assert_eq!(valid.status.code(), Some(0));

    let rejected = run_cli(&["check", "gamer", "--data", r#"{"username":"neo","age":101}"#])?;
    assert_eq!(rejected.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&rejected.stdout)
            .contains("Field 'age' in class Gamer must be less than or equal to 100.")
    );

    let mismatch = run_cli(&["check", "item", "--data", r#"{"title":"phone"}"#])?;
    assert_eq!(mismatch.status.code(), Some(1));
    Ok(())
}

#[test]
fn check_json_collects_every_failure() -> io::Result<()> {
    let output = run_cli(&[
        "--output",
        "json",
        "check",
        "item",
        "--mode",
        "collectAll",
        "--data",
        r#"{"title":null,"description":"no"}"#,
    ])?;
    assert_eq!(output.status.code(), Some(2));

    let value = stdout_json(&output)?;
    assert_eq!(value.get("status"), Some(&serde_json::json!("rejected")));
    let codes: Vec<&str> = value
        .pointer("/report/declared")
        .and_then(serde_json::Value::as_array)
        .map(|findings| {
            findings
                .iter()
                .filter_map(|finding| finding.get("code").and_then(serde_json::Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(codes, ["validation:null", "validation:length"]);
    Ok(())
}

#[test]
fn check_rejects_malformed_json() -> io::Result<()> {
    let output = run_cli(&["check", "plane", "--data", "{not json"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("code: check:invalid_json"));
    Ok(())
}

#[test]
fn check_missing_input_file_is_io() -> io::Result<()> {
    let output = run_cli(&["check", "plane", "--input", "no/such/record.json"])?;
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).contains("code: core:not_found"));
    Ok(())
}

#[test]
fn unknown_kind_is_a_usage_error() -> io::Result<()> {
    let output = run_cli(&["schema", "boat"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown record kind 'boat'"));
    Ok(())
}

#[test]
fn schema_lists_declared_constraints() -> io::Result<()> {
    let output = run_cli(&["schema", "item"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "class Item\n  title: @NotNull\n  description: @StringLength(min = 3, max = 100)\n"
    );
    Ok(())
}
