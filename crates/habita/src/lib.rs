//! Habita Domain Library
//!
//! Core analytics engine for the Habita habit tracker: derives streaks,
//! points, levels, weekly activity and achievement unlock state from a
//! log of per-habit completion dates.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and data
//!   - `entities/`: Core domain models (Habit, UserProfile, AchievementDefinition)
//!   - `value_objects/`: Immutable value types (DaySet, Requirement)
//!   - `catalog`: The static achievement catalog
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `clock`: Injectable calendar-day source, so "today" is fixable in tests
//!
//! - **Services** (`services/`): Stateless computation services
//!   - `analytics`: Streak, points, level and activity derivations
//!   - `achievements`: Unlock evaluation and transition detection
//!   - `recompute`: The post-mutation recompute transaction
//!
//! # Usage
//!
//! ```rust,ignore
//! use habita::domain::{Habit, UserProfile};
//! use habita::services::{Analytics, Recomputer};
//!
//! let analytics = Analytics::system();
//! let streak = analytics.global_streak(&habits);
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    achievement_by_id, achievement_catalog, AchievementDefinition, DaySet, DomainError, Habit,
    Requirement, SpecialKind, UserProfile, CATALOG_SIZE,
};
pub use ports::{Clock, FixedClock, SystemClock};
pub use services::{
    AchievementChecker, Analytics, DayActivity, GoalProgress, ProgressSnapshot, RecomputeOutcome,
    Recomputer,
};
