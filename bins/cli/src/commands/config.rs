//! Config command handlers.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, format_error_output, to_json_output};
use fieldcheck_config::{
    DemoConfig, DemoEnv, load_demo_config_from_path, load_demo_config_std_env, to_pretty_toml,
};
use fieldcheck_shared::{ErrorEnvelope, Validated};
use std::path::Path;

/// Print the effective config (defaults, file, then env).
pub fn run_config_show(mode: OutputMode, path: Option<&Path>) -> Result<CliOutput, CliError> {
    render_config(mode, path, load_demo_config_std_env(path))
}

pub(crate) fn run_config_show_with_env(
    mode: OutputMode,
    path: Option<&Path>,
    env: &DemoEnv,
) -> Result<CliOutput, CliError> {
    render_config(mode, path, load_demo_config_from_path(path, env))
}

fn render_config(
    mode: OutputMode,
    path: Option<&Path>,
    loaded: Result<Validated<DemoConfig>, ErrorEnvelope>,
) -> Result<CliOutput, CliError> {
    let config = match loaded {
        Ok(config) => config,
        Err(error) => return format_error_output(mode, &error),
    };

    let stdout = if mode.is_json() {
        to_json_output(&serde_json::json!({
            "status": "ok",
            "configPath": path.map(|value| value.to_string_lossy().to_string()),
            "effectiveConfig": &*config,
        }))?
    } else {
        let toml = match to_pretty_toml(config.as_ref()) {
            Ok(toml) => toml,
            Err(error) => return format_error_output(mode, &error),
        };
        format!("status: ok\nconfig:\n{toml}")
    };
    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}
