//! UserProfile - Aggregate progress fields for one user
//!
//! The persistence layer owns these values; the engine consumes them as
//! inputs to the recompute transaction and returns the updated snapshot.

use serde::{Deserialize, Serialize};

fn default_daily_goal() -> u32 {
    3
}

fn default_level() -> u32 {
    1
}

/// UserProfile - Derived progress state, written back after each recompute
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name, not interpreted by the engine
    #[serde(default)]
    pub name: String,
    /// Cumulative points, achievement bonus included
    #[serde(default)]
    pub total_points: u32,
    /// Current level (1-based, one level per 100 points)
    #[serde(default = "default_level")]
    pub level: u32,
    /// Current global streak
    #[serde(default)]
    pub current_streak: u32,
    /// Highest global streak ever observed. Never decreases
    #[serde(default)]
    pub max_streak: u32,
    /// Ids of achievements currently credited to the user
    #[serde(default)]
    pub unlocked_achievements: Vec<String>,
    /// Running total of one-time achievement bonus points
    #[serde(default)]
    pub achievement_points: u32,
    /// Habits the user aims to complete per day
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            total_points: 0,
            level: 1,
            current_streak: 0,
            max_streak: 0,
            unlocked_achievements: Vec::new(),
            achievement_points: 0,
            daily_goal: default_daily_goal(),
        }
    }
}
