//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Habit: a tracked habit with its completion-day log
//! - UserProfile: aggregate progress fields for one user
//! - AchievementDefinition: one entry of the static achievement catalog

mod achievement;
mod habit;
mod profile;

pub use achievement::*;
pub use habit::*;
pub use profile::*;
