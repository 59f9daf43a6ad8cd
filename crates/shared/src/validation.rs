//! The declared-constraint field validator.
//!
//! Fields are visited in table order. For each field the checks run as
//! not-null, string-length, max-value, min-value. The default mode stops at
//! the first failure; [`ValidationMode::CollectAll`] keeps going and returns
//! every failure.

use crate::constraint::{FieldValue, text_length};
use crate::errors::{ErrorCode, ErrorEnvelope};
use crate::invariants::Validated;
use crate::schema::{FieldSchema, Validatable};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Reason a present constraint rejected a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// `NotNull` on an absent value.
    #[error("cannot be null")]
    Null,
    /// `StringLength` outside `[min, max]`.
    #[error("must have length between {min} and {max}")]
    Length {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// `MaxValue` exceeded.
    #[error("must be less than or equal to {max}")]
    AboveMax {
        /// Inclusive upper bound.
        max: i64,
        /// Observed value.
        actual: i64,
    },
    /// `MinValue` not reached.
    #[error("must be greater than or equal to {min}")]
    BelowMin {
        /// Inclusive lower bound.
        min: i64,
        /// Observed value.
        actual: i64,
    },
}

impl Violation {
    /// Stable error code for the violated constraint kind.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Null => ErrorCode::new("validation", "null"),
            Self::Length { .. } => ErrorCode::new("validation", "length"),
            Self::AboveMax { .. } => ErrorCode::new("validation", "max_value"),
            Self::BelowMin { .. } => ErrorCode::new("validation", "min_value"),
        }
    }
}

/// Value type a constraint kind requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    /// `StringLength` needs text.
    Text,
    /// `MinValue` / `MaxValue` need an integer.
    Integer,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => formatter.write_str("String for @StringLength"),
            Self::Integer => formatter.write_str("Integer for numeric validation"),
        }
    }
}

/// Failure reported by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A declared constraint rejected the field value.
    #[error("Field '{field}' in class {owner} {violation}.")]
    ConstraintViolation {
        /// Simple name of the owning type.
        owner: &'static str,
        /// Field name.
        field: &'static str,
        /// What was violated.
        violation: Violation,
    },
    /// A constraint is attached to a field whose value can never satisfy it.
    #[error("Field '{field}' in class {owner} is not of type {expected}.")]
    TypeMismatch {
        /// Simple name of the owning type.
        owner: &'static str,
        /// Field name.
        field: &'static str,
        /// Type the constraint requires.
        expected: ExpectedType,
        /// Kind of value actually found.
        found: &'static str,
    },
}

impl FieldError {
    /// Field name the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ConstraintViolation { field, .. } | Self::TypeMismatch { field, .. } => *field,
        }
    }

    /// Simple name of the owning type.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        match self {
            Self::ConstraintViolation { owner, .. } | Self::TypeMismatch { owner, .. } => *owner,
        }
    }

    /// Returns true for a misdeclared constraint rather than bad data.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Stable error code.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::ConstraintViolation { violation, .. } => violation.error_code(),
            Self::TypeMismatch { .. } => ErrorCode::new("validation", "type_mismatch"),
        }
    }
}

impl From<FieldError> for ErrorEnvelope {
    fn from(error: FieldError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = if error.is_type_mismatch() {
            Self::invariant(code, message)
        } else {
            Self::expected(code, message)
        };
        let envelope = envelope
            .with_metadata("owner", error.owner())
            .with_metadata("field", error.field());

        match error {
            FieldError::ConstraintViolation { violation, .. } => match violation {
                Violation::Null => envelope,
                Violation::Length { min, max, actual } => envelope
                    .with_metadata("min", min.to_string())
                    .with_metadata("max", max.to_string())
                    .with_metadata("value", actual.to_string()),
                Violation::AboveMax { max, actual } => envelope
                    .with_metadata("max", max.to_string())
                    .with_metadata("value", actual.to_string()),
                Violation::BelowMin { min, actual } => envelope
                    .with_metadata("min", min.to_string())
                    .with_metadata("value", actual.to_string()),
            },
            FieldError::TypeMismatch { found, .. } => envelope.with_metadata("found", found),
        }
    }
}

/// Whether validation stops at the first failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Stop at the first failing constraint.
    #[default]
    FailFast,
    /// Check every constraint and report all failures.
    CollectAll,
}

impl ValidationMode {
    /// Canonical camelCase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailFast => "failFast",
            Self::CollectAll => "collectAll",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unrecognized [`ValidationMode`] label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation mode '{input}' (expected failFast or collectAll)")]
pub struct ParseModeError {
    /// Raw input.
    pub input: String,
}

impl FromStr for ValidationMode {
    type Err = ParseModeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "failFast" | "fail-fast" | "fail_fast" => Ok(Self::FailFast),
            "collectAll" | "collect-all" | "collect_all" => Ok(Self::CollectAll),
            other => Err(ParseModeError {
                input: other.to_string(),
            }),
        }
    }
}

/// All failures found in collect-all mode, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Returns true when nothing failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the report and return its failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok` when valid, otherwise the first failure.
    pub fn into_result(self) -> Result<(), FieldError> {
        self.errors.into_iter().next().map_or(Ok(()), Err)
    }
}

/// Validate `object` and stop at the first failing constraint.
pub fn validate<T: Validatable>(object: &T) -> Result<(), FieldError> {
    scan(object, &mut FirstFailure)
}

/// Validate `object` and report every failing constraint.
///
/// A `NotNull` failure ends the checks of that field, so an absent value is
/// not reported a second time as a type mismatch.
pub fn validate_all<T: Validatable>(object: &T) -> ValidationReport {
    let mut sink = AllFailures::default();
    let Ok(()) = scan(object, &mut sink);
    ValidationReport { errors: sink.0 }
}

/// Validate `object` in the requested mode.
pub fn validate_with<T: Validatable>(object: &T, mode: ValidationMode) -> ValidationReport {
    match mode {
        ValidationMode::FailFast => ValidationReport {
            errors: validate(object).err().into_iter().collect(),
        },
        ValidationMode::CollectAll => validate_all(object),
    }
}

/// Validate `value` and wrap it in a [`Validated`] proof.
pub fn validate_into<T: Validatable>(value: T) -> Result<Validated<T>, FieldError> {
    validate(&value)?;
    Ok(Validated::new(value))
}

/// Receives failures as they are found; `Err` stops the scan.
trait Sink {
    type Stop;

    fn record(&mut self, error: FieldError) -> Result<(), Self::Stop>;
}

struct FirstFailure;

impl Sink for FirstFailure {
    type Stop = FieldError;

    fn record(&mut self, error: FieldError) -> Result<(), FieldError> {
        log_failure(&error);
        Err(error)
    }
}

#[derive(Default)]
struct AllFailures(Vec<FieldError>);

impl Sink for AllFailures {
    type Stop = Infallible;

    fn record(&mut self, error: FieldError) -> Result<(), Infallible> {
        log_failure(&error);
        self.0.push(error);
        Ok(())
    }
}

fn log_failure(error: &FieldError) {
    tracing::debug!(
        owner = error.owner(),
        field = error.field(),
        code = %error.error_code(),
        "field validation failed"
    );
}

fn scan<T: Validatable, S: Sink>(object: &T, sink: &mut S) -> Result<(), S::Stop> {
    let schema = T::schema();
    for (index, field) in schema.constrained_fields() {
        check_field(schema.type_name(), field, object.field_value(index), sink)?;
    }
    Ok(())
}

fn check_field<S: Sink>(
    owner: &'static str,
    field: &FieldSchema,
    value: FieldValue<'_>,
    sink: &mut S,
) -> Result<(), S::Stop> {
    let violation = |reason| FieldError::ConstraintViolation {
        owner,
        field: field.name(),
        violation: reason,
    };
    let mismatch = |expected| FieldError::TypeMismatch {
        owner,
        field: field.name(),
        expected,
        found: value.kind(),
    };

    if field.is_not_null() && value.is_absent() {
        return sink.record(violation(Violation::Null));
    }

    if let Some((min, max)) = field.string_length() {
        if let FieldValue::Text(text) = value {
            let actual = text_length(text);
            if actual < min || actual > max {
                sink.record(violation(Violation::Length { min, max, actual }))?;
            }
        } else {
            sink.record(mismatch(ExpectedType::Text))?;
        }
    }

    if field.is_numeric() {
        if let FieldValue::Integer(actual) = value {
            if let Some(max) = field.max_value() {
                if actual > max {
                    sink.record(violation(Violation::AboveMax { max, actual }))?;
                }
            }
            if let Some(min) = field.min_value() {
                if actual < min {
                    sink.record(violation(Violation::BelowMin { min, actual }))?;
                }
            }
        } else {
            sink.record(mismatch(ExpectedType::Integer))?;
        }
    }

    Ok(())
}
