//! Achievement Catalog
//!
//! The fixed set of achievements, never mutated at runtime. Requirements
//! are typed variants decided here, once, instead of being re-parsed from
//! their string encoding on every evaluation.

use crate::domain::entities::AchievementDefinition;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Requirement, SpecialKind};

/// Number of achievements in the catalog
pub const CATALOG_SIZE: usize = 17;

const CATALOG: [AchievementDefinition; CATALOG_SIZE] = [
    // Streak achievements
    AchievementDefinition {
        id: "1",
        name: "First Week",
        description: "Keep a streak of 7 consecutive days",
        icon: "🔥",
        category: "Streak",
        requirement: Requirement::Streak(7),
        max_progress: 7,
        points_bonus: 50,
    },
    AchievementDefinition {
        id: "2",
        name: "Unstoppable Month",
        description: "Keep a streak of 30 consecutive days",
        icon: "⚡",
        category: "Streak",
        requirement: Requirement::Streak(30),
        max_progress: 30,
        points_bonus: 200,
    },
    AchievementDefinition {
        id: "3",
        name: "Legend",
        description: "Keep a streak of 100 consecutive days",
        icon: "👑",
        category: "Streak",
        requirement: Requirement::Streak(100),
        max_progress: 100,
        points_bonus: 1000,
    },
    // Habit-count achievements
    AchievementDefinition {
        id: "4",
        name: "Collector",
        description: "Create 5 different habits",
        icon: "📝",
        category: "Habits",
        requirement: Requirement::HabitCount(5),
        max_progress: 5,
        points_bonus: 100,
    },
    AchievementDefinition {
        id: "5",
        name: "Habit Master",
        description: "Create 10 different habits",
        icon: "🎯",
        category: "Habits",
        requirement: Requirement::HabitCount(10),
        max_progress: 10,
        points_bonus: 250,
    },
    AchievementDefinition {
        id: "16",
        name: "Expert",
        description: "Create 20 different habits",
        icon: "🎓",
        category: "Habits",
        requirement: Requirement::HabitCount(20),
        max_progress: 20,
        points_bonus: 500,
    },
    // Completion achievements
    AchievementDefinition {
        id: "6",
        name: "First Steps",
        description: "Complete habits 10 times in total",
        icon: "✅",
        category: "Completions",
        requirement: Requirement::Completions(10),
        max_progress: 10,
        points_bonus: 30,
    },
    AchievementDefinition {
        id: "7",
        name: "Consistency",
        description: "Complete habits 50 times in total",
        icon: "💪",
        category: "Completions",
        requirement: Requirement::Completions(50),
        max_progress: 50,
        points_bonus: 150,
    },
    AchievementDefinition {
        id: "8",
        name: "Relentless",
        description: "Complete habits 100 times in total",
        icon: "🚀",
        category: "Completions",
        requirement: Requirement::Completions(100),
        max_progress: 100,
        points_bonus: 300,
    },
    AchievementDefinition {
        id: "9",
        name: "Champion",
        description: "Complete habits 500 times in total",
        icon: "🏆",
        category: "Completions",
        requirement: Requirement::Completions(500),
        max_progress: 500,
        points_bonus: 1500,
    },
    // Points achievements
    AchievementDefinition {
        id: "10",
        name: "Rookie",
        description: "Reach 100 total points",
        icon: "⭐",
        category: "Points",
        requirement: Requirement::Points(100),
        max_progress: 100,
        points_bonus: 20,
    },
    AchievementDefinition {
        id: "11",
        name: "Contender",
        description: "Reach 1000 total points",
        icon: "💎",
        category: "Points",
        requirement: Requirement::Points(1000),
        max_progress: 1000,
        points_bonus: 200,
    },
    AchievementDefinition {
        id: "12",
        name: "Master",
        description: "Reach 5000 total points",
        icon: "🌟",
        category: "Points",
        requirement: Requirement::Points(5000),
        max_progress: 5000,
        points_bonus: 1000,
    },
    AchievementDefinition {
        id: "17",
        name: "Points Legend",
        description: "Reach 10000 total points",
        icon: "💫",
        category: "Points",
        requirement: Requirement::Points(10000),
        max_progress: 10000,
        points_bonus: 2500,
    },
    // Special achievements, defined but not yet evaluated
    AchievementDefinition {
        id: "13",
        name: "Early Bird",
        description: "Complete 10 habits before 8 AM",
        icon: "🌅",
        category: "Special",
        requirement: Requirement::Special(SpecialKind::EarlyBird),
        max_progress: 10,
        points_bonus: 150,
    },
    AchievementDefinition {
        id: "14",
        name: "Weekend Warrior",
        description: "Complete all your habits on a Saturday and Sunday",
        icon: "🎉",
        category: "Special",
        requirement: Requirement::Special(SpecialKind::WeekendWarrior),
        max_progress: 1,
        points_bonus: 100,
    },
    AchievementDefinition {
        id: "15",
        name: "Perfection",
        description: "Complete all your daily habits for 7 days straight",
        icon: "✨",
        category: "Special",
        requirement: Requirement::Special(SpecialKind::PerfectWeek),
        max_progress: 7,
        points_bonus: 500,
    },
];

/// The full achievement catalog, in stable display order
pub fn achievement_catalog() -> &'static [AchievementDefinition] {
    &CATALOG
}

/// Look up an achievement by id
pub fn achievement_by_id(id: &str) -> Result<&'static AchievementDefinition, DomainError> {
    CATALOG
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| DomainError::achievement_not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_has_unique_ids() {
        let ids: BTreeSet<&str> = CATALOG.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_lookup_known_id() {
        let achievement = achievement_by_id("2").unwrap();
        assert_eq!(achievement.requirement, Requirement::Streak(30));
        assert_eq!(achievement.points_bonus, 200);
    }

    #[test]
    fn test_lookup_unknown_id_fails() {
        let result = achievement_by_id("999");
        assert!(matches!(
            result,
            Err(DomainError::AchievementNotFound { id }) if id == "999"
        ));
    }

    #[test]
    fn test_threshold_matches_max_progress() {
        for achievement in achievement_catalog() {
            match achievement.requirement {
                Requirement::Streak(n)
                | Requirement::HabitCount(n)
                | Requirement::Completions(n)
                | Requirement::Points(n) => assert_eq!(n, achievement.max_progress),
                Requirement::Special(_) => {}
            }
        }
    }
}
