//! Demo configuration schema, defaults, and validation.
//!
//! Bounds are declared with `#[validate]` and checked by the same validator the
//! sample records go through.

use fieldcheck_shared::{
    ErrorCode, ErrorEnvelope, FieldError, Validated, ValidationMode, validate_into,
};
use fieldcheck_validate_derive::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Default number of timed passes per suite.
pub const DEFAULT_ITERATIONS: u32 = 1;
/// Default number of untimed warm-up passes per suite.
pub const DEFAULT_WARMUP_ITERATIONS: u32 = 0;

const ITERATIONS_MIN: i64 = 1;
const ITERATIONS_MAX: i64 = 1_000_000;
const WARMUP_ITERATIONS_MAX: i64 = 100_000;

/// Settings for the comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validatable)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DemoConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Timed passes per suite.
    #[validate(min = ITERATIONS_MIN, max = ITERATIONS_MAX)]
    pub iterations: u32,
    /// Untimed passes per suite run before timing starts.
    #[validate(field = "warmupIterations", min = 0, max = WARMUP_ITERATIONS_MAX)]
    pub warmup_iterations: u32,
    /// Validation mode used by the declared-constraint suite.
    pub mode: ValidationMode,
    /// Which samples the comparison run times.
    pub samples: SampleSet,
}

/// Sample inputs a comparison run times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SampleSet {
    /// Declared records against their constructor-validated twins.
    #[default]
    Canonical,
    /// Declared gamer and long-description item against the plane's
    /// hand-written `validate`.
    Showcase,
}

impl SampleSet {
    /// Canonical camelCase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Showcase => "showcase",
        }
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unrecognized [`SampleSet`] label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sample set '{input}' (expected canonical or showcase)")]
pub struct ParseSampleSetError {
    /// Raw input.
    pub input: String,
}

impl FromStr for SampleSet {
    type Err = ParseSampleSetError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "showcase" => Ok(Self::Showcase),
            _ => Err(ParseSampleSetError {
                input: input.to_string(),
            }),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            iterations: DEFAULT_ITERATIONS,
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            mode: ValidationMode::default(),
            samples: SampleSet::default(),
        }
    }
}

impl DemoConfig {
    /// Check the version and declared bounds.
    pub fn validate(self) -> Result<Validated<Self>, ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(validate_into(self)?)
    }
}

/// Configuration rejected after parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigSchemaError {
    /// The `version` field is not one this build understands.
    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the input.
        found: u32,
        /// Version this build supports.
        supported: u32,
    },
    /// A declared bound rejected a field.
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let message = error.to_string();
        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => Self::expected(
                ErrorCode::new("config", "unsupported_version"),
                message,
            )
            .with_metadata("found", found.to_string())
            .with_metadata("supported", supported.to_string()),
            ConfigSchemaError::Field(field) => Self::from(field).with_metadata("source", "config"),
        }
    }
}

/// Parse and validate a JSON config document.
pub fn parse_demo_config_json(input: &str) -> Result<Validated<DemoConfig>, ErrorEnvelope> {
    let config: DemoConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;
    config.validate().map_err(Into::into)
}

/// Parse and validate a TOML config document.
pub fn parse_demo_config_toml(input: &str) -> Result<Validated<DemoConfig>, ErrorEnvelope> {
    let config: DemoConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;
    config.validate().map_err(Into::into)
}
