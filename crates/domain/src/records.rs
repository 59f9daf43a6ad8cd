//! Records validated through declared constraints.
//!
//! `Gamer` and `Item` carry `#[validate]` declarations and are checked by the
//! generic validator. `Plane` declares nothing, so the generic validator always
//! accepts it; its rules live in a hand-written [`Plane::validate`] instead.

use crate::errors::RecordError;
use fieldcheck_shared::text_length;
use fieldcheck_validate_derive::Validatable;
use serde::{Deserialize, Serialize};

/// A player with a username and age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validatable)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Gamer {
    /// Username; must be present.
    #[validate(not_null)]
    pub username: Option<String>,
    /// Age in years; `12..=100`.
    #[validate(min = 12, max = 100)]
    pub age: i32,
}

impl Gamer {
    /// Build a gamer without checking anything.
    pub fn new(username: Option<&str>, age: i32) -> Self {
        Self {
            username: username.map(str::to_owned),
            age,
        }
    }
}

/// A product with a title and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validatable)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Item {
    /// Title; must be present.
    #[validate(not_null)]
    pub title: Option<String>,
    /// Description; `3..=100` characters.
    #[validate(length(min = 3, max = 100))]
    pub description: Option<String>,
}

impl Item {
    /// Build an item without checking anything.
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_owned),
            description: description.map(str::to_owned),
        }
    }
}

/// Owner label used by [`Plane::validate`] messages.
const PLANE: &str = "class Plane";
const PLANE_MODEL_LENGTH: (usize, usize) = (3, 25);
const PLANE_YEARS: (i64, i64) = (1970, 2024);

/// A plane with a model name and build year.
///
/// No field declares a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validatable)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Plane {
    /// Model name.
    pub model: Option<String>,
    /// Build year.
    pub year: i32,
}

impl Plane {
    /// Build a plane without checking anything.
    pub fn new(model: Option<&str>, year: i32) -> Self {
        Self {
            model: model.map(str::to_owned),
            year,
        }
    }

    /// Hand-written checks: model present with `3..=25` characters, year in
    /// `1970..=2024`.
    pub fn validate(&self) -> Result<(), RecordError> {
        let Some(model) = self.model.as_deref() else {
            return Err(RecordError::Null {
                owner: PLANE,
                field: "model",
            });
        };
        let (min, max) = PLANE_MODEL_LENGTH;
        let length = text_length(model);
        if length < min || length > max {
            return Err(RecordError::Length {
                owner: PLANE,
                field: "model",
                min,
                max,
            });
        }
        let (first, last) = PLANE_YEARS;
        if !(first..=last).contains(&i64::from(self.year)) {
            return Err(RecordError::OutOfRange {
                owner: PLANE,
                field: "year",
                min: first,
                max: last,
            });
        }
        Ok(())
    }
}
