//! Static constraint tables.
//!
//! A [`Schema`] is the compile-time replacement for reading annotations off a
//! class at runtime: one table per type, listing directly declared fields in
//! declaration order together with the constraints attached to each.
//! `#[derive(Validatable)]` emits it as a `static`; it can also be written by
//! hand:
//!
//! ```
//! use fieldcheck_shared::{Constraint, FieldSchema, FieldValue, Schema, Validatable};
//!
//! struct Badge {
//!     label: Option<String>,
//! }
//!
//! impl Validatable for Badge {
//!     fn schema() -> &'static Schema {
//!         const LABEL: &[Constraint] = &[Constraint::NotNull];
//!         const FIELDS: &[FieldSchema] = &[FieldSchema::new("label", LABEL)];
//!         static SCHEMA: Schema = Schema::new("Badge", FIELDS);
//!         &SCHEMA
//!     }
//!
//!     fn field_value(&self, index: usize) -> FieldValue<'_> {
//!         match index {
//!             0 => self.label.as_deref().map_or(FieldValue::Absent, FieldValue::Text),
//!             _ => FieldValue::Absent,
//!         }
//!     }
//! }
//!
//! let error = fieldcheck_shared::validate(&Badge { label: None }).err();
//! assert_eq!(
//!     error.map(|error| error.to_string()).as_deref(),
//!     Some("Field 'label' in class Badge cannot be null.")
//! );
//! ```

use crate::constraint::{Constraint, FieldValue};

/// Constraint declarations attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    name: &'static str,
    constraints: &'static [Constraint],
}

impl FieldSchema {
    /// Declare a field and its constraints.
    pub const fn new(name: &'static str, constraints: &'static [Constraint]) -> Self {
        Self { name, constraints }
    }

    /// Field name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Constraints in declaration order.
    #[must_use]
    pub const fn constraints(&self) -> &'static [Constraint] {
        self.constraints
    }

    /// Returns true when at least one constraint is attached.
    #[must_use]
    pub const fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Returns true when `NotNull` is attached.
    #[must_use]
    pub fn is_not_null(&self) -> bool {
        self.constraints.contains(&Constraint::NotNull)
    }

    /// First `StringLength` bounds, if declared.
    #[must_use]
    pub fn string_length(&self) -> Option<(usize, usize)> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::StringLength { min, max } => Some((*min, *max)),
            _ => None,
        })
    }

    /// First `MinValue` bound, if declared.
    #[must_use]
    pub fn min_value(&self) -> Option<i64> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::MinValue(bound) => Some(*bound),
            _ => None,
        })
    }

    /// First `MaxValue` bound, if declared.
    #[must_use]
    pub fn max_value(&self) -> Option<i64> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::MaxValue(bound) => Some(*bound),
            _ => None,
        })
    }

    /// Returns true when a numeric constraint is attached.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.constraints.iter().any(|constraint| constraint.is_numeric())
    }
}

/// The constraint table of a validatable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    type_name: &'static str,
    fields: &'static [FieldSchema],
}

impl Schema {
    /// Build a table for the type with the given simple name.
    pub const fn new(type_name: &'static str, fields: &'static [FieldSchema]) -> Self {
        Self { type_name, fields }
    }

    /// Simple name of the owning type, as reported in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared fields in declaration order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSchema] {
        self.fields
    }

    /// Look up a field by name, returning its position in the table.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldSchema)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Fields that carry at least one constraint, with their positions.
    pub fn constrained_fields(&self) -> impl Iterator<Item = (usize, &'static FieldSchema)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_constrained())
    }
}

/// A record whose fields can be checked against a static constraint table.
///
/// Usually implemented with `#[derive(Validatable)]`.
pub trait Validatable {
    /// The type's constraint table.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Current value of the field at `index` in [`Schema::fields`].
    ///
    /// Only called for constrained fields; out-of-range indices return
    /// [`FieldValue::Absent`].
    fn field_value(&self, index: usize) -> FieldValue<'_>;
}
