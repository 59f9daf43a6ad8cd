//! Check command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, format_error_output, to_json_output};
use fieldcheck_app::{CheckReport, Finding, check_record};
use fieldcheck_domain::RecordKind;
use fieldcheck_shared::{ErrorEnvelope, ValidationMode};
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

/// Where the record JSON comes from.
#[derive(Debug, Clone, Copy)]
pub enum RecordSource<'a> {
    /// Inline JSON text.
    Inline(&'a str),
    /// A file path; `-` reads stdin.
    File(&'a Path),
}

fn read_source(source: RecordSource<'_>) -> Result<String, ErrorEnvelope> {
    match source {
        RecordSource::Inline(text) => Ok(text.to_string()),
        RecordSource::File(path) if path == Path::new("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
        RecordSource::File(path) => std::fs::read_to_string(path).map_err(|error| {
            ErrorEnvelope::from(error).with_metadata("path", path.display().to_string())
        }),
    }
}

/// Run the check command.
pub fn run_check(
    mode: OutputMode,
    kind: RecordKind,
    source: RecordSource<'_>,
    validation: ValidationMode,
) -> Result<CliOutput, CliError> {
    let json = match read_source(source) {
        Ok(json) => json,
        Err(error) => return format_error_output(mode, &error),
    };
    let report = match check_record(kind, &json, validation) {
        Ok(report) => report,
        Err(error) => return format_error_output(mode, &error),
    };

    let exit_code = check_exit_code(&report);
    let stdout = if mode.is_json() {
        to_json_output(&serde_json::json!({
            "status": status_label(&report),
            "report": report,
        }))?
    } else {
        format_report_text(&report)
    };
    Ok(CliOutput { stdout, exit_code })
}

fn check_exit_code(report: &CheckReport) -> ExitCode {
    if report.has_type_mismatch() {
        ExitCode::Internal
    } else if report.is_valid() {
        ExitCode::Ok
    } else {
        ExitCode::InvalidInput
    }
}

fn write_finding(out: &mut String, label: &str, finding: Option<&Finding>) {
    match finding {
        None => {
            let _ = writeln!(out, "{label}: passed");
        },
        Some(finding) => {
            let _ = writeln!(out, "{label}: {} [{}]", finding.message, finding.code);
        },
    }
}

fn status_label(report: &CheckReport) -> &'static str {
    if report.is_valid() { "ok" } else { "rejected" }
}

fn format_report_text(report: &CheckReport) -> String {
    let mut out = format!("status: {}\nkind: {}\n", status_label(report), report.kind);
    if report.declared.is_empty() {
        write_finding(&mut out, "declared", None);
    }
    for finding in &report.declared {
        write_finding(&mut out, "declared", Some(finding));
    }
    write_finding(&mut out, "constructor", report.constructor.as_ref());
    if let Some(finding) = report.hand_written.as_ref() {
        write_finding(&mut out, "hand-written", Some(finding));
    }
    out
}
