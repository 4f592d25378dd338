//! AchievementDefinition - One entry of the static achievement catalog

use serde::Serialize;

use crate::domain::value_objects::Requirement;

/// A named milestone with a numeric threshold and a one-time bonus.
/// Definitions are static; see [`crate::domain::catalog`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// How to unlock it
    pub description: &'static str,
    /// Emoji shown next to the name
    pub icon: &'static str,
    /// Grouping label for the achievements screen
    pub category: &'static str,
    /// Typed unlock condition
    pub requirement: Requirement,
    /// Threshold the progress value is capped at
    pub max_progress: u32,
    /// Points credited once, when the achievement unlocks
    pub points_bonus: u32,
}
