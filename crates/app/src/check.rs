//! Check one caller-supplied record with every approach that applies to it.

use fieldcheck_domain::{
    Gamer, Item, Plane, RecordError, RecordKind, TypedGamer, TypedItem, TypedPlane,
};
use fieldcheck_shared::{
    ErrorCode, ErrorEnvelope, ErrorKind, FieldError, ValidationMode, validate_with,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One failure, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Stable error code (`namespace:code`).
    pub code: String,
    /// Field the failure refers to, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Full message.
    pub message: String,
    /// Whether the failure is a declaration defect rather than bad data.
    pub type_mismatch: bool,
}

impl From<ErrorEnvelope> for Finding {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self {
            code: envelope.code.to_string(),
            field: envelope.metadata.get("field").cloned(),
            message: envelope.message,
            type_mismatch: envelope.kind == ErrorKind::Invariant,
        }
    }
}

impl From<FieldError> for Finding {
    fn from(error: FieldError) -> Self {
        ErrorEnvelope::from(error).into()
    }
}

impl From<RecordError> for Finding {
    fn from(error: RecordError) -> Self {
        ErrorEnvelope::from(error).into()
    }
}

/// Outcome of [`check_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// Record kind that was checked.
    pub kind: RecordKind,
    /// Mode used for the declared-constraint check.
    pub mode: ValidationMode,
    /// Failures from the declared constraints.
    pub declared: Vec<Finding>,
    /// Failure from the constructor-validated counterpart, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<Finding>,
    /// Failure from the record's own hand-written checks, if it has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_written: Option<Finding>,
}

impl CheckReport {
    /// Whether every approach accepted the record.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.declared.is_empty() && self.constructor.is_none() && self.hand_written.is_none()
    }

    /// Whether any declared constraint sits on a field of the wrong type.
    #[must_use]
    pub fn has_type_mismatch(&self) -> bool {
        self.declared.iter().any(|finding| finding.type_mismatch)
    }
}

fn parse_record<T: DeserializeOwned>(kind: RecordKind, json: &str) -> Result<T, ErrorEnvelope> {
    serde_json::from_str(json).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("check", "invalid_json"),
            format!("invalid {kind} JSON: {error}"),
        )
        .with_metadata("kind", kind.as_str())
    })
}

fn declared_findings<T: fieldcheck_shared::Validatable>(
    record: &T,
    mode: ValidationMode,
) -> Vec<Finding> {
    validate_with(record, mode)
        .into_errors()
        .into_iter()
        .map(Finding::from)
        .collect()
}

/// Parse a record of `kind` from JSON and check it with the declared
/// constraints, the constructor-validated counterpart, and (for planes) the
/// hand-written checks.
#[tracing::instrument(name = "fieldcheck.check", skip_all, fields(%kind, %mode))]
pub fn check_record(
    kind: RecordKind,
    json: &str,
    mode: ValidationMode,
) -> Result<CheckReport, ErrorEnvelope> {
    let report = match kind {
        RecordKind::Gamer => {
            let record: Gamer = parse_record(kind, json)?;
            CheckReport {
                kind,
                mode,
                declared: declared_findings(&record, mode),
                constructor: TypedGamer::new(record.username.as_deref(), record.age)
                    .err()
                    .map(Finding::from),
                hand_written: None,
            }
        },
        RecordKind::Item => {
            let record: Item = parse_record(kind, json)?;
            CheckReport {
                kind,
                mode,
                declared: declared_findings(&record, mode),
                constructor: TypedItem::new(record.title.as_deref(), record.description.as_deref())
                    .err()
                    .map(Finding::from),
                hand_written: None,
            }
        },
        RecordKind::Plane => {
            let record: Plane = parse_record(kind, json)?;
            CheckReport {
                kind,
                mode,
                declared: declared_findings(&record, mode),
                constructor: TypedPlane::new(record.model.as_deref(), record.year)
                    .err()
                    .map(Finding::from),
                hand_written: record.validate().err().map(Finding::from),
            }
        },
    };
    tracing::debug!(
        declared = report.declared.len(),
        valid = report.is_valid(),
        "record checked"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_gamer_passes_everywhere() -> Result<(), ErrorEnvelope> {
        let report = check_record(
            RecordKind::Gamer,
            r#"{"username":"neo","age":30}"#,
            ValidationMode::FailFast,
        )?;
        assert!(report.is_valid());
        assert!(!report.has_type_mismatch());
        Ok(())
    }

    #[test]
    fn null_username_is_reported_by_both_approaches() -> Result<(), ErrorEnvelope> {
        let report = check_record(
            RecordKind::Gamer,
            r#"{"username":null,"age":18}"#,
            ValidationMode::FailFast,
        )?;
        assert_eq!(
            report.declared,
            vec![Finding {
                code: "validation:null".to_string(),
                field: Some("username".to_string()),
                message: "Field 'username' in class Gamer cannot be null.".to_string(),
                type_mismatch: false,
            }]
        );
        assert_eq!(
            report.constructor.map(|finding| finding.code),
            Some("record:blank".to_string())
        );
        Ok(())
    }

    #[test]
    fn plane_is_accepted_by_declarations_only() -> Result<(), ErrorEnvelope> {
        let report = check_record(
            RecordKind::Plane,
            r#"{"model":"B","year":1960}"#,
            ValidationMode::CollectAll,
        )?;
        assert!(report.declared.is_empty());
        assert_eq!(
            report.hand_written.map(|finding| finding.message),
            Some("Field 'model' in class Plane must have length between 3 and 25.".to_string())
        );
        assert!(report.constructor.is_some());
        Ok(())
    }

    #[test]
    fn missing_description_is_flagged_as_type_mismatch() -> Result<(), ErrorEnvelope> {
        let report = check_record(
            RecordKind::Item,
            r#"{"title":"phone","description":null}"#,
            ValidationMode::FailFast,
        )?;
        assert!(report.has_type_mismatch());
        assert_eq!(
            report.declared.first().map(|finding| finding.code.as_str()),
            Some("validation:type_mismatch")
        );
        Ok(())
    }

    #[test]
    fn malformed_json_is_an_expected_error() {
        let error = check_record(RecordKind::Item, "{", ValidationMode::FailFast).err();
        assert_eq!(
            error.as_ref().map(|error| error.code.clone()),
            Some(ErrorCode::new("check", "invalid_json"))
        );
        assert_eq!(error.map(|error| error.kind), Some(ErrorKind::Expected));
    }
}
