//! Domain Layer
//!
//! Pure domain entities, value objects and the static achievement
//! catalog. No I/O, no clock reads, no infrastructure dependencies.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{achievement_by_id, achievement_catalog, CATALOG_SIZE};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
