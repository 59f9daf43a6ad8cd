//! # fieldcheck-domain
//!
//! The sample records compared by the demo, in both styles:
//!
//! - [`records`]: plain data carrying `#[validate]` declarations, checked by
//!   `fieldcheck_shared::validate`
//! - [`typed`]: records that check their inputs in `new` and cannot exist in
//!   an invalid state
//! - [`samples`]: the canonical inputs used by the comparison run

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod records;
pub mod samples;
pub mod typed;

pub use errors::RecordError;
pub use records::{Gamer, Item, Plane};
pub use samples::{ParseRecordKindError, RecordKind};
pub use typed::{TypedGamer, TypedItem, TypedPlane};
