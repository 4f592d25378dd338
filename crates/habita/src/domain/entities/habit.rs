//! Habit - A tracked habit and its completion log
//!
//! Owned and mutated by the surrounding application (creation, toggling,
//! deletion); the engine only reads it. Field names on the wire follow the
//! upstream camelCase convention.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DaySet;

/// Habit - A recurring activity the user tracks daily
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Opaque identifier, unique within a collection
    pub id: String,
    /// Display name, not interpreted by the engine
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Category label (health, study, ...), not interpreted
    #[serde(default)]
    pub category: String,
    /// Target days per week (0-7). Informational only; streak math ignores it
    #[serde(default)]
    pub frequency: u8,
    /// Completion days as `YYYY-MM-DD` strings, unordered on input
    #[serde(default)]
    pub completed_dates: Vec<String>,
    /// Last computed consecutive-day count. A cached derived view; the
    /// engine recomputes from `completed_dates` and never trusts this
    #[serde(default)]
    pub streak: u32,
    /// Most recent completion day, if any
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,
    /// Base points awarded per completion
    pub points: u32,
    /// Creation timestamp, not used in derivations
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Normalized, deduplicated completion-day set
    pub fn day_set(&self) -> DaySet {
        DaySet::from_strings(&self.completed_dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_upstream_wire_format() {
        let json = r#"{
            "id": "h1",
            "name": "Read",
            "description": "Read 20 pages",
            "category": "study",
            "frequency": 5,
            "completedDates": ["2024-01-02", "2024-01-01"],
            "streak": 2,
            "lastCompleted": "2024-01-02",
            "points": 10,
            "createdAt": "2024-01-01T08:00:00Z"
        }"#;

        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.id, "h1");
        assert_eq!(habit.points, 10);
        assert_eq!(habit.day_set().len(), 2);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "h2",
            "name": "Run",
            "points": 5,
            "createdAt": "2024-01-01T08:00:00Z"
        }"#;

        let habit: Habit = serde_json::from_str(json).unwrap();
        assert!(habit.completed_dates.is_empty());
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.last_completed, None);
    }
}
