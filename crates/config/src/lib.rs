//! # fieldcheck-config
//!
//! Settings for the comparison run: schema and bounds, env parsing, and file
//! loading with a fixed precedence (env, then file, then defaults).

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    DemoEnv, ENV_ITERATIONS, ENV_MODE, ENV_SAMPLES, ENV_WARMUP_ITERATIONS, EnvParseError, apply_env_overrides,
};
pub use load::{
    ConfigFormat, load_demo_config_from_path, load_demo_config_from_sources,
    load_demo_config_std_env, to_pretty_json, to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigSchemaError, DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS,
    DemoConfig, ParseSampleSetError, SampleSet, parse_demo_config_json, parse_demo_config_toml,
};
