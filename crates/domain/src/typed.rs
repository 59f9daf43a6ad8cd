//! Records that validate in their constructors.
//!
//! A value of these types can only exist if its fields passed the checks, so
//! the stored fields are plain `String`/`i32` rather than `Option`s.

use crate::errors::RecordError;
use fieldcheck_shared::text_length;

const GAMER_AGE: (i64, i64) = (12, 100);
const ITEM_DESCRIPTION_LENGTH: (usize, usize) = (3, 100);
const PLANE_MODEL_LENGTH: (usize, usize) = (3, 25);
const PLANE_YEARS: (i64, i64) = (1970, 2024);

fn require_text(
    owner: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<String, RecordError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(RecordError::Blank { owner, field }),
    }
}

fn require_length(
    owner: &'static str,
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
) -> Result<(), RecordError> {
    let length = text_length(value);
    if length < min || length > max {
        return Err(RecordError::Length {
            owner,
            field,
            min,
            max,
        });
    }
    Ok(())
}

fn require_range(
    owner: &'static str,
    field: &'static str,
    value: i32,
    (min, max): (i64, i64),
) -> Result<(), RecordError> {
    if !(min..=max).contains(&i64::from(value)) {
        return Err(RecordError::OutOfRange {
            owner,
            field,
            min,
            max,
        });
    }
    Ok(())
}

/// A gamer whose username is non-empty and whose age is `12..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedGamer {
    username: String,
    age: i32,
}

impl TypedGamer {
    /// Check and build.
    pub fn new(username: Option<&str>, age: i32) -> Result<Self, RecordError> {
        const OWNER: &str = "TypedGamer";
        let username = require_text(OWNER, "username", username)?;
        require_range(OWNER, "age", age, GAMER_AGE)?;
        Ok(Self { username, age })
    }

    /// Username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }
}

/// An item with a non-empty title and a `3..=100` character description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedItem {
    title: String,
    description: String,
}

impl TypedItem {
    /// Check and build.
    pub fn new(title: Option<&str>, description: Option<&str>) -> Result<Self, RecordError> {
        const OWNER: &str = "TypedItem";
        let title = require_text(OWNER, "title", title)?;
        // a missing description reports the length rule, not a null rule
        let (min, max) = ITEM_DESCRIPTION_LENGTH;
        let Some(description) = description else {
            return Err(RecordError::Length {
                owner: OWNER,
                field: "description",
                min,
                max,
            });
        };
        require_length(OWNER, "description", description, ITEM_DESCRIPTION_LENGTH)?;
        Ok(Self {
            title,
            description: description.to_owned(),
        })
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A plane with a `3..=25` character model built in `1970..=2024`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedPlane {
    model: String,
    year: i32,
}

impl TypedPlane {
    /// Check and build.
    pub fn new(model: Option<&str>, year: i32) -> Result<Self, RecordError> {
        const OWNER: &str = "TypedPlane";
        let model = require_text(OWNER, "model", model)?;
        require_length(OWNER, "model", &model, PLANE_MODEL_LENGTH)?;
        require_range(OWNER, "year", year, PLANE_YEARS)?;
        Ok(Self { model, year })
    }

    /// Model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}
