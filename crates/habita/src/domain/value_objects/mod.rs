//! Value Objects
//!
//! Immutable value types used across the domain.

mod day_set;
mod requirement;

pub use day_set::DaySet;
pub use requirement::{Requirement, SpecialKind};
