//! Canonical sample inputs used by the comparison run and the benchmarks.

use crate::errors::RecordError;
use crate::records::{Gamer, Item, Plane};
use crate::typed::{TypedGamer, TypedItem, TypedPlane};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title shared by the item samples.
pub const SMARTPHONE_TITLE: &str = "Xiomi Redmi 13T";

/// A description longer than the 100 characters an item allows.
pub const SMARTPHONE_DESCRIPTION: &str = "Xiomi Redmi 13T \u{2014} a modern smartphone featuring a \
     high-performance processor, a quality camera, and a sleek design. Perfect for everyday use, \
     gaming, and photography.";

/// Gamer without a username.
pub fn gamer() -> Gamer {
    Gamer::new(None, 18)
}

/// Item whose description is too short.
pub fn item() -> Item {
    Item::new(Some(SMARTPHONE_TITLE), Some("T"))
}

/// Plane that breaks every hand-written rule but declares no constraints.
pub fn plane() -> Plane {
    Plane::new(Some("B"), 1960)
}

/// Item whose description is longer than an item allows.
pub fn long_item() -> Item {
    Item::new(Some(SMARTPHONE_TITLE), Some(SMARTPHONE_DESCRIPTION))
}

/// Plane dated before the hand-written year range.
pub fn vintage_plane() -> Plane {
    Plane::new(Some("Boeing 747"), 1890)
}

/// Plane that satisfies the hand-written checks.
pub fn airbus_plane() -> Plane {
    Plane::new(Some("Airbus A-320"), 1990)
}

/// Constructor-validated gamer without a username.
pub fn typed_gamer() -> Result<TypedGamer, RecordError> {
    TypedGamer::new(None, 18)
}

/// Constructor-validated item with an over-long description.
pub fn typed_item() -> Result<TypedItem, RecordError> {
    TypedItem::new(Some(SMARTPHONE_TITLE), Some(SMARTPHONE_DESCRIPTION))
}

/// Constructor-validated plane with a short model and an early year.
pub fn typed_plane() -> Result<TypedPlane, RecordError> {
    TypedPlane::new(Some("B"), 1960)
}

/// Which sample record a request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    /// [`Gamer`] / [`TypedGamer`].
    Gamer,
    /// [`Item`] / [`TypedItem`].
    Item,
    /// [`Plane`] / [`TypedPlane`].
    Plane,
}

impl RecordKind {
    /// All kinds in display order.
    pub const ALL: [Self; 3] = [Self::Gamer, Self::Item, Self::Plane];

    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gamer => "gamer",
            Self::Item => "item",
            Self::Plane => "plane",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unrecognized [`RecordKind`] label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind '{input}' (expected gamer, item or plane)")]
pub struct ParseRecordKindError {
    /// Raw input.
    pub input: String,
}

impl FromStr for RecordKind {
    type Err = ParseRecordKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseRecordKindError {
                input: input.to_string(),
            })
    }
}
