//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use clap::{ArgGroup, Parser, Subcommand};
use commands::{
    CompareOverrides, RecordSource, run_check, run_compare, run_config_show, run_schema,
};
use error::{CliError, ExitCode};
use fieldcheck_config::SampleSet;
use fieldcheck_domain::RecordKind;
use fieldcheck_shared::ValidationMode;
use format::{OutputArgs, OutputMode};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fieldcheck",
    version,
    about = "Compare declared-constraint validation with constructor and hand-written validation",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Time both validation styles over the sample records.
    Compare {
        /// Optional config file path (JSON/TOML).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Timed passes per suite.
        #[arg(long)]
        iterations: Option<u32>,
        /// Untimed warm-up passes per suite.
        #[arg(long)]
        warmup: Option<u32>,
        /// Declared-suite mode: `failFast` or `collectAll`.
        #[arg(long)]
        mode: Option<ValidationMode>,
        /// Sample set: `canonical` or `showcase`.
        #[arg(long)]
        samples: Option<SampleSet>,
    },
    /// Check one record given as JSON.
    #[command(group(ArgGroup::new("source").required(true).args(["data", "input"])))]
    Check {
        /// Record kind: gamer, item, or plane.
        kind: RecordKind,
        /// Inline record JSON.
        #[arg(long)]
        data: Option<String>,
        /// Path to a record JSON file (`-` for stdin).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Declared-constraint mode: `failFast` or `collectAll`.
        #[arg(long, default_value_t = ValidationMode::FailFast)]
        mode: ValidationMode,
    },
    /// Show the declared constraints of a record kind.
    Schema {
        /// Record kind: gamer, item, or plane.
        kind: RecordKind,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config after defaults, file, and env.
    Show {
        /// Optional config file path (JSON/TOML).
        #[arg(long = "config")]
        path: Option<PathBuf>,
    },
}

pub(crate) struct CliOutput {
    pub(crate) stdout: String,
    pub(crate) exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.output.log_json, cli.output.quiet);
    let mode = OutputMode::from_args(&cli.output);

    match run(&cli.command, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: &Commands, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        Commands::Compare {
            config,
            iterations,
            warmup,
            mode: validation,
            samples,
        } => run_compare(
            mode,
            config.as_deref(),
            CompareOverrides {
                iterations: *iterations,
                warmup: *warmup,
                mode: *validation,
                samples: *samples,
            },
        ),
        Commands::Check {
            kind,
            data,
            input,
            mode: validation,
        } => {
            let source = match (data.as_deref(), input.as_deref()) {
                (Some(text), _) => RecordSource::Inline(text),
                (None, Some(path)) => RecordSource::File(path),
                (None, None) => {
                    return Err(CliError::InvalidInput(
                        "one of --data or --input is required".to_string(),
                    ));
                },
            };
            run_check(mode, *kind, source, *validation)
        },
        Commands::Schema { kind } => run_schema(mode, *kind),
        Commands::Config { command } => match command {
            ConfigCommands::Show { path } => run_config_show(mode, path.as_deref()),
        },
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
