//! Config loading helpers (env + file + overrides).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::env::{DemoEnv, apply_env_overrides};
use crate::schema::DemoConfig;
use fieldcheck_shared::{ErrorCode, ErrorEnvelope, Validated};
use std::path::Path;

/// Serialization format of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` (also used when the path has no extension).
    Json,
    /// `.toml`.
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn detect(path: &Path) -> Result<Self, ErrorEnvelope> {
        let ext = path
            .extension()
            .and_then(|value| value.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            None | Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(ErrorEnvelope::expected(
                ErrorCode::new("config", "unsupported_format"),
                "unsupported config format; use .json or .toml",
            )
            .with_metadata("extension", other.to_string())),
        }
    }
}

/// Load the demo config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`DemoEnv`)
/// - config document
/// - defaults (`DemoConfig::default()`)
pub fn load_demo_config_from_sources(
    config_text: Option<(&str, ConfigFormat)>,
    env: &DemoEnv,
) -> Result<Validated<DemoConfig>, ErrorEnvelope> {
    let config = match config_text {
        None => DemoConfig::default(),
        Some((input, format)) => parse_config_unvalidated(input, format)?,
    };

    // env is applied last and also validates the resulting config.
    let config = apply_env_overrides(config, env)?;
    tracing::debug!(
        iterations = config.iterations,
        warmup_iterations = config.warmup_iterations,
        mode = %config.mode,
        env_overrides = !env.is_empty(),
        "config resolved"
    );
    Ok(config)
}

/// Load the demo config from an optional file path.
pub fn load_demo_config_from_path(
    config_path: Option<&Path>,
    env: &DemoEnv,
) -> Result<Validated<DemoConfig>, ErrorEnvelope> {
    let Some(path) = config_path else {
        return load_demo_config_from_sources(None, env);
    };
    let format = ConfigFormat::detect(path)?;
    let config_text = read_config_file(path)?;
    tracing::debug!(path = %path.display(), ?format, "config file read");
    load_demo_config_from_sources(Some((&config_text, format)), env)
        .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))
}

/// Load the demo config from std env and an optional file path.
pub fn load_demo_config_std_env(
    config_path: Option<&Path>,
) -> Result<Validated<DemoConfig>, ErrorEnvelope> {
    let env = DemoEnv::from_std_env()?;
    load_demo_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &DemoConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &DemoConfig) -> Result<String, ErrorEnvelope> {
    let output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
        )
    })?;
    Ok(if output.ends_with('\n') {
        output
    } else {
        output + "\n"
    })
}

fn parse_config_unvalidated(input: &str, format: ConfigFormat) -> Result<DemoConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}
