//! CLI E2E tests for config loading: file formats, env overrides, errors.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map_or_else(|| manifest_dir.to_path_buf(), Path::to_path_buf)
}

fn fixture_path(name: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join("config")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fieldcheck"));
    for (key, _) in std::env::vars() {
        if key.starts_with("FIELDCHECK_") {
            command.env_remove(key);
        }
    }
    command
}

fn json(output: &Output) -> io::Result<serde_json::Value> {
    serde_json::from_slice(&output.stdout).map_err(io::Error::other)
}

#[test]
fn config_show_reads_toml_file() -> io::Result<()> {
    let output = cli()
        .args(["--output", "json", "config", "show", "--config"])
        .arg(fixture_path("demo.valid.toml"))
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let value = json(&output)?;
    assert_eq!(
        value.get("effectiveConfig"),
        Some(&serde_json::json!({
            "version": 1,
            "iterations": 1000,
            "warmupIterations": 100,
            "mode": "collectAll",
            "samples": "canonical",
        }))
    );
    Ok(())
}

#[test]
fn env_overrides_file_values() -> io::Result<()> {
    let output = cli()
        .args(["--output", "json", "config", "show", "--config"])
        .arg(fixture_path("demo.valid.json"))
        .env("FIELDCHECK_ITERATIONS", "25")
        .env("FIELDCHECK_MODE", "collectAll")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let value = json(&output)?;
    let config = value.get("effectiveConfig");
    assert_eq!(
        config.and_then(|config| config.get("iterations")),
        Some(&serde_json::json!(25))
    );
    assert_eq!(
        config.and_then(|config| config.get("warmupIterations")),
        Some(&serde_json::json!(50))
    );
    assert_eq!(
        config.and_then(|config| config.get("mode")),
        Some(&serde_json::json!("collectAll"))
    );
    Ok(())
}

#[test]
fn samples_env_var_reaches_effective_config() -> io::Result<()> {
    let output = cli()
        .args(["--output", "json", "config", "show"])
        .env("FIELDCHECK_SAMPLES", "showcase")
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let value = json(&output)?;
    assert_eq!(
        value.pointer("/effectiveConfig/samples"),
        Some(&serde_json::json!("showcase"))
    );
    Ok(())
}

#[test]
fn out_of_range_file_is_rejected_with_field_message() -> io::Result<()> {
    let output = cli()
        .args(["--output", "json", "config", "show", "--config"])
        .arg(fixture_path("demo.out-of-range.json"))
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let value = json(&output)?;
    assert_eq!(
        value.pointer("/error/code"),
        Some(&serde_json::json!("validation:max_value"))
    );
    assert_eq!(
        value.pointer("/error/message"),
        Some(&serde_json::json!(
            "Field 'iterations' in class DemoConfig must be less than or equal to 1000000."
        ))
    );
    Ok(())
}

#[test]
fn invalid_env_value_is_rejected() -> io::Result<()> {
    let output = cli()
        .args(["config", "show"])
        .env("FIELDCHECK_ITERATIONS", "many")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("code: config:invalid_env_int"));
    Ok(())
}

#[test]
fn missing_config_file_exits_with_io() -> io::Result<()> {
    let output = cli()
        .args(["compare", "--config", "does/not/exist.toml"])
        .output()?;
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).contains("config:config_file_not_found"));
    Ok(())
}

#[test]
fn compare_flag_beats_env() -> io::Result<()> {
    let output = cli()
        .args(["compare", "--iterations", "2"])
        .env("FIELDCHECK_ITERATIONS", "0")
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("over 2 passes"));
    Ok(())
}
