//! Tracing subscriber setup; logs go to stderr so stdout stays parseable.

use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive (e.g. `debug`, `fieldcheck_app=trace`).
pub const ENV_LOG: &str = "FIELDCHECK_LOG";

fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_tracing(json: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(error) = result {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
}
