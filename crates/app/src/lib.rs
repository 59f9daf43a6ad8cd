//! # fieldcheck-app
//!
//! Use cases behind the CLI: the timed comparison of both validation styles,
//! checking a caller-supplied record, and describing a record's constraints.
//! This crate depends on `config`, `domain`, and `shared`.

pub mod check;
pub mod compare;
pub mod describe;

pub use check::{CheckReport, Finding, check_record};
pub use compare::{
    Approach, ComparisonReport, Outcome, SuiteRun, Verdict, compare, run_constructor_suite,
    run_declared_suite, run_hand_written_suite,
};
pub use describe::{FieldDescription, SchemaDescription, describe_schema};
