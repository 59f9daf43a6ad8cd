//! Environment variable parsing and env-to-config merging.
//!
//! Parsing is strict: a variable that is set but empty or malformed fails
//! instead of being ignored. Range checks are left to [`DemoConfig::validate`].

use crate::schema::{ConfigSchemaError, DemoConfig, SampleSet};
use fieldcheck_shared::{ErrorCode, ErrorEnvelope, Validated, ValidationMode};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Env var: timed passes per suite.
pub const ENV_ITERATIONS: &str = "FIELDCHECK_ITERATIONS";
/// Env var: untimed warm-up passes per suite.
pub const ENV_WARMUP_ITERATIONS: &str = "FIELDCHECK_WARMUP_ITERATIONS";
/// Env var: validation mode (`failFast` or `collectAll`).
pub const ENV_MODE: &str = "FIELDCHECK_MODE";
/// Env var: sample set (`canonical` or `showcase`).
pub const ENV_SAMPLES: &str = "FIELDCHECK_SAMPLES";

const ENV_VARS: [&str; 4] = [ENV_ITERATIONS, ENV_WARMUP_ITERATIONS, ENV_MODE, ENV_SAMPLES];

/// Overrides read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoEnv {
    /// `FIELDCHECK_ITERATIONS`.
    pub iterations: Option<u32>,
    /// `FIELDCHECK_WARMUP_ITERATIONS`.
    pub warmup_iterations: Option<u32>,
    /// `FIELDCHECK_MODE`.
    pub mode: Option<ValidationMode>,
    /// `FIELDCHECK_SAMPLES`.
    pub samples: Option<SampleSet>,
}

impl DemoEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            iterations: parse_optional_u32(map, ENV_ITERATIONS)?,
            warmup_iterations: parse_optional_u32(map, ENV_WARMUP_ITERATIONS)?,
            mode: parse_optional_enum::<ValidationMode>(map, ENV_MODE)?,
            samples: parse_optional_enum::<SampleSet>(map, ENV_SAMPLES)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let map = ENV_VARS
            .into_iter()
            .filter_map(|name| {
                std::env::var(name)
                    .ok()
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        Self::from_map(&map)
    }

    /// Whether no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.iterations.is_none()
            && self.warmup_iterations.is_none()
            && self.mode.is_none()
            && self.samples.is_none()
    }
}

/// Apply env overrides to a base config (env wins over file/default values).
pub fn apply_env_overrides(
    base: DemoConfig,
    env: &DemoEnv,
) -> Result<Validated<DemoConfig>, ConfigSchemaError> {
    let mut config = base;
    if let Some(iterations) = env.iterations {
        config.iterations = iterations;
    }
    if let Some(warmup_iterations) = env.warmup_iterations {
        config.warmup_iterations = warmup_iterations;
    }
    if let Some(mode) = env.mode {
        config.mode = mode;
    }
    if let Some(samples) = env.samples {
        config.samples = samples;
    }
    config.validate()
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    #[error("{var} must be non-empty")]
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Integer env var had an invalid value.
    #[error("{var} must be a non-negative integer")]
    InvalidInt {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an invalid value.
    #[error("{var} has an unsupported value")]
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidInt { .. } => ErrorCode::new("config", "invalid_env_int"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidInt { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", value)
            },
        }
    }
}

fn non_empty<'a>(
    map: &'a BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<&'a str>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }
    Ok(Some(trimmed))
}

fn parse_optional_u32(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<u32>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| EnvParseError::InvalidInt {
            var,
            value: trimmed.to_string(),
        })
}

fn parse_optional_enum<T: FromStr>(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<T>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| EnvParseError::InvalidEnum {
            var,
            value: trimmed.to_string(),
        })
}
