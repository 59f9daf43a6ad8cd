//! # fieldcheck-shared
//!
//! Constraint tables, the declared-constraint field validator, and the error
//! types shared by the rest of the workspace.
//!
//! - [`Constraint`] / [`FieldSchema`] / [`Schema`]: a static, per-type table
//!   of field constraints (usually emitted by `#[derive(Validatable)]`)
//! - [`validate`] / [`validate_all`]: the field validator
//! - [`FieldError`]: constraint violations vs. misdeclared constraints
//! - [`ErrorEnvelope`]: boundary error type
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **No runtime introspection** - Tables are built at compile time
//! 3. **Stateless** - Validation never mutates the record or any global state

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod constraint;
pub mod errors;
pub mod invariants;
pub mod schema;
pub mod validation;

pub use constraint::{AsFieldValue, Constraint, FieldValue, text_length};
pub use errors::{ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::Validated;
pub use schema::{FieldSchema, Schema, Validatable};
pub use validation::{
    ExpectedType, FieldError, ParseModeError, ValidationMode, ValidationReport, Violation,
    validate, validate_all, validate_into, validate_with,
};

