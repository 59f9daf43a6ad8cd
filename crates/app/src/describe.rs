//! Describe the declared constraint table of a sample record.

use fieldcheck_domain::{Gamer, Item, Plane, RecordKind};
use fieldcheck_shared::{Schema, Validatable};
use serde::Serialize;

/// One field and its declared constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescription {
    /// Field name as reported in messages.
    pub name: &'static str,
    /// Constraints in declaration order, rendered as annotations.
    pub constraints: Vec<String>,
}

/// Constraint table of one record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescription {
    /// Record kind.
    pub kind: RecordKind,
    /// Owner name used in messages.
    pub type_name: &'static str,
    /// Every field, constrained or not.
    pub fields: Vec<FieldDescription>,
}

fn schema_of(kind: RecordKind) -> &'static Schema {
    match kind {
        RecordKind::Gamer => Gamer::schema(),
        RecordKind::Item => Item::schema(),
        RecordKind::Plane => Plane::schema(),
    }
}

/// Describe the constraint table for `kind`.
#[must_use]
pub fn describe_schema(kind: RecordKind) -> SchemaDescription {
    let schema = schema_of(kind);
    SchemaDescription {
        kind,
        type_name: schema.type_name(),
        fields: schema
            .fields()
            .iter()
            .map(|field| FieldDescription {
                name: field.name(),
                constraints: field
                    .constraints()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect(),
    }
}
