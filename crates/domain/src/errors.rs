//! Errors raised by hand-written record checks.

use fieldcheck_shared::{ErrorCode, ErrorEnvelope};

/// Failure raised by a constructor or a hand-written `validate` method.
///
/// `owner` is rendered verbatim, so inline checks can keep their own wording
/// (`TypedGamer` vs. `class Plane`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required value was absent.
    #[error("Field '{field}' in {owner} cannot be null.")]
    Null {
        /// Owner label.
        owner: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// A required text value was absent or empty.
    #[error("Field '{field}' in {owner} cannot be null or empty.")]
    Blank {
        /// Owner label.
        owner: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// A text value (or its absence) fell outside the length bounds.
    #[error("Field '{field}' in {owner} must have length between {min} and {max}.")]
    Length {
        /// Owner label.
        owner: &'static str,
        /// Field name.
        field: &'static str,
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// A numeric value fell outside its inclusive range.
    #[error("Field '{field}' in {owner} must be between {min} and {max}.")]
    OutOfRange {
        /// Owner label.
        owner: &'static str,
        /// Field name.
        field: &'static str,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

impl RecordError {
    /// Field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Null { field, .. }
            | Self::Blank { field, .. }
            | Self::Length { field, .. }
            | Self::OutOfRange { field, .. } => *field,
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::Null { .. } => ErrorCode::new("record", "null"),
            Self::Blank { .. } => ErrorCode::new("record", "blank"),
            Self::Length { .. } => ErrorCode::new("record", "length"),
            Self::OutOfRange { .. } => ErrorCode::new("record", "out_of_range"),
        }
    }
}

impl From<RecordError> for ErrorEnvelope {
    fn from(error: RecordError) -> Self {
        Self::expected(error.error_code(), error.to_string()).with_metadata("field", error.field())
    }
}
