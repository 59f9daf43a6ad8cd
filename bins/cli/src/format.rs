//! Output format helpers for CLI commands.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use clap::{Args, ValueEnum};
use fieldcheck_shared::ErrorEnvelope;
use serde::Serialize;
use std::fmt::Write as _;

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
    /// Write logs to stderr as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
    /// Only log warnings and errors.
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Output mode derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
}

impl OutputMode {
    /// Build output mode from CLI flags.
    #[must_use]
    pub const fn from_args(args: &OutputArgs) -> Self {
        Self {
            format: args.output,
        }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json_output<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

/// Render a library error and pick the matching exit code.
pub fn format_error_output(mode: OutputMode, error: &ErrorEnvelope) -> Result<CliOutput, CliError> {
    tracing::warn!(code = %error.code, "command failed");
    let stdout = if mode.is_json() {
        to_json_output(&serde_json::json!({
            "status": "error",
            "error": {
                "kind": error.kind,
                "code": error.code.to_string(),
                "message": error.message,
                "metadata": error.metadata,
            },
        }))?
    } else {
        let mut out = format!(
            "status: error\ncode: {}\nmessage: {}\n",
            error.code, error.message
        );
        for (key, value) in &error.metadata {
            let _ = writeln!(out, "{key}: {value}");
        }
        out
    };
    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::for_envelope(error),
    })
}
