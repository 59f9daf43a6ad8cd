//! Schema command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_output};
use fieldcheck_app::describe_schema;
use fieldcheck_domain::RecordKind;
use std::fmt::Write as _;

/// Run the schema command.
pub fn run_schema(mode: OutputMode, kind: RecordKind) -> Result<CliOutput, CliError> {
    let description = describe_schema(kind);
    let stdout = if mode.is_json() {
        to_json_output(&description)?
    } else {
        let mut out = format!("class {}\n", description.type_name);
        for field in &description.fields {
            if field.constraints.is_empty() {
                let _ = writeln!(out, "  {}: (none)", field.name);
            } else {
                let _ = writeln!(out, "  {}: {}", field.name, field.constraints.join(" "));
            }
        }
        out
    };
    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}
