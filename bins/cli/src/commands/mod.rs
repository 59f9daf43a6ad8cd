//! CLI command handlers.

pub mod check;
pub mod compare;
pub mod config;
pub mod schema;

pub use check::{RecordSource, run_check};
pub use compare::{CompareOverrides, run_compare};
pub use config::run_config_show;
pub use schema::run_schema;
