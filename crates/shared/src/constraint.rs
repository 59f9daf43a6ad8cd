//! Constraint descriptors and the runtime view of field values.

use std::fmt;

/// A single validity rule attached to a field.
///
/// Constraints are plain data so that a type's whole table can live in a
/// `static` and be shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The field value must not be absent.
    NotNull,
    /// The text length, as counted by [`text_length`], must lie in `[min, max]`.
    StringLength {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// The integer value must be `>= bound`.
    MinValue(i64),
    /// The integer value must be `<= bound`.
    MaxValue(i64),
}

impl Constraint {
    /// Upper bound used when a `StringLength` declares only a minimum
    /// (the largest 32-bit signed length).
    pub const LENGTH_UNBOUNDED: usize = 2_147_483_647;

    /// Returns true when the constraint only applies to integer values.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::MinValue(_) | Self::MaxValue(_))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNull => formatter.write_str("@NotNull"),
            Self::StringLength { min, max } if *max == Self::LENGTH_UNBOUNDED => {
                write!(formatter, "@StringLength(min = {min})")
            },
            Self::StringLength { min, max } => {
                write!(formatter, "@StringLength(min = {min}, max = {max})")
            },
            Self::MinValue(bound) => write!(formatter, "@MinValue({bound})"),
            Self::MaxValue(bound) => write!(formatter, "@MaxValue({bound})"),
        }
    }
}

/// Length of `text` in UTF-16 code units.
///
/// A character outside the Basic Multilingual Plane (most emoji) counts as
/// two.
#[must_use]
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Runtime view of a field value, as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// No value (`None`).
    Absent,
    /// A textual value.
    Text(&'a str),
    /// An integer value that fits in `i64` without loss.
    Integer(i64),
    /// Any other value; carries the Rust type name for diagnostics.
    Other(&'static str),
}

impl FieldValue<'_> {
    /// Returns true when the value is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Short label describing what kind of value this is.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "null",
            Self::Text(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Other(type_name) => *type_name,
        }
    }
}

/// Conversion from a field's Rust type into a [`FieldValue`].
///
/// Every field that carries a constraint must implement this; unconstrained
/// fields are never read by the validator.
pub trait AsFieldValue {
    /// Borrow the value as a [`FieldValue`].
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Box<str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_ref()
            .map_or(FieldValue::Absent, AsFieldValue::as_field_value)
    }
}

impl AsFieldValue for i64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self)
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

integer_field_value!(i8, i16, i32, u8, u16, u32);

// Types that can carry a constraint but never satisfy one.
macro_rules! opaque_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Other(stringify!($ty))
                }
            }
        )*
    };
}

opaque_field_value!(bool, char, f32, f64, u64, u128, i128, usize, isize);
