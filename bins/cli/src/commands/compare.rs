//! Compare command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, format_error_output, to_json_output};
use fieldcheck_app::{ComparisonReport, SuiteRun, compare};
use fieldcheck_config::{DemoEnv, SampleSet, load_demo_config_from_path};
use fieldcheck_shared::{ErrorEnvelope, ValidationMode};
use std::fmt::Write as _;
use std::path::Path;

/// Flags accepted by `compare`; each one wins over env and file values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareOverrides {
    pub iterations: Option<u32>,
    pub warmup: Option<u32>,
    pub mode: Option<ValidationMode>,
    pub samples: Option<SampleSet>,
}

/// Run the compare command.
pub fn run_compare(
    mode: OutputMode,
    config_path: Option<&Path>,
    overrides: CompareOverrides,
) -> Result<CliOutput, CliError> {
    let env = match DemoEnv::from_std_env() {
        Ok(env) => env,
        Err(error) => return format_error_output(mode, &ErrorEnvelope::from(error)),
    };
    run_compare_with_env(mode, config_path, overrides, env)
}

pub(crate) fn run_compare_with_env(
    mode: OutputMode,
    config_path: Option<&Path>,
    overrides: CompareOverrides,
    env: DemoEnv,
) -> Result<CliOutput, CliError> {
    let env = DemoEnv {
        iterations: overrides.iterations.or(env.iterations),
        warmup_iterations: overrides.warmup.or(env.warmup_iterations),
        mode: overrides.mode.or(env.mode),
        samples: overrides.samples.or(env.samples),
    };
    let config = match load_demo_config_from_path(config_path, &env) {
        Ok(config) => config,
        Err(error) => return format_error_output(mode, &error),
    };

    let report = compare(config.as_ref());
    let stdout = if mode.is_json() {
        to_json_output(&serde_json::json!({
            "status": "ok",
            "report": report,
        }))?
    } else {
        format_report_text(&report)
    };
    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

fn format_suite(out: &mut String, title: &str, suite: &SuiteRun) {
    let _ = writeln!(out, "{title}:");
    for outcome in &suite.outcomes {
        if outcome.is_ok() {
            let _ = writeln!(out, "  {}: passed", outcome.subject);
        }
        for message in &outcome.messages {
            let _ = writeln!(out, "  {}: {message}", outcome.subject);
        }
    }
    let _ = writeln!(
        out,
        "  elapsed: {} us over {} passes ({:.3} us/pass)",
        suite.total_micros, suite.iterations, suite.per_pass_micros
    );
}

fn format_report_text(report: &ComparisonReport) -> String {
    let mut out = String::from("status: ok\n");
    format_suite(
        &mut out,
        &format!("declared ({})", report.config.mode),
        &report.declared,
    );
    let baseline = report.baseline.approach;
    format_suite(&mut out, baseline.label(), &report.baseline);
    let _ = writeln!(
        out,
        "difference: {} us (declared - {})",
        report.difference_micros,
        baseline.label()
    );
    let _ = writeln!(out, "verdict: {}", report.verdict.describe(baseline));
    out
}
