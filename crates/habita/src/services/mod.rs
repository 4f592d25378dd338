//! Services
//!
//! Stateless computation services over the domain entities. All of them
//! are pure with respect to their inputs plus the injected clock; they can
//! be called from any execution context.

pub mod achievements;
pub mod analytics;
pub mod recompute;

pub use achievements::{AchievementChecker, ProgressSnapshot};
pub use analytics::{Analytics, DayActivity, GoalProgress};
pub use recompute::{RecomputeOutcome, Recomputer};
