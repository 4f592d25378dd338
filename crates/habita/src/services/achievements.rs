//! Achievement Service - Unlock evaluation and transition detection
//!
//! Evaluates the static catalog against a progress snapshot and detects
//! locked-to-unlocked transitions so the one-time bonus is awarded exactly
//! once. Evaluation is idempotent: identical inputs always produce the
//! identical unlocked set.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{
    achievement_by_id, achievement_catalog, AchievementDefinition, DomainError, Habit, Requirement,
};

/// The counters achievement requirements are checked against
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressSnapshot {
    pub habit_count: u32,
    pub total_completions: u32,
    /// Total points, achievement bonus included
    pub total_points: u32,
    pub max_streak: u32,
}

/// Stateless achievement evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementChecker;

impl AchievementChecker {
    pub fn new() -> Self {
        Self
    }

    /// Build the snapshot the catalog is evaluated against.
    /// `total_points` must already include previously awarded bonus points.
    pub fn snapshot(
        &self,
        habits: &[Habit],
        total_points: u32,
        max_streak: u32,
    ) -> ProgressSnapshot {
        ProgressSnapshot {
            habit_count: habits.len() as u32,
            total_completions: habits.iter().map(|h| h.day_set().len() as u32).sum(),
            total_points,
            max_streak,
        }
    }

    /// Progress toward one achievement, capped at its threshold.
    /// Special requirement kinds are not evaluated yet and report 0.
    pub fn progress_for(
        &self,
        achievement: &AchievementDefinition,
        snapshot: &ProgressSnapshot,
    ) -> u32 {
        let value = match achievement.requirement {
            Requirement::Streak(_) => snapshot.max_streak,
            Requirement::HabitCount(_) => snapshot.habit_count,
            Requirement::Completions(_) => snapshot.total_completions,
            Requirement::Points(_) => snapshot.total_points,
            Requirement::Special(_) => 0,
        };
        value.min(achievement.max_progress)
    }

    /// Ids of every achievement whose requirement is currently met
    pub fn unlocked_set(
        &self,
        habits: &[Habit],
        total_points: u32,
        max_streak: u32,
    ) -> BTreeSet<String> {
        let snapshot = self.snapshot(habits, total_points, max_streak);
        achievement_catalog()
            .iter()
            .filter(|a| self.progress_for(a, &snapshot) >= a.max_progress)
            .map(|a| a.id.to_string())
            .collect()
    }

    /// Ids present in `current` but absent from `previous`, in catalog order
    pub fn newly_unlocked(
        &self,
        previous: &BTreeSet<String>,
        current: &BTreeSet<String>,
    ) -> Vec<String> {
        achievement_catalog()
            .iter()
            .filter(|a| current.contains(a.id) && !previous.contains(a.id))
            .map(|a| a.id.to_string())
            .collect()
    }

    /// Sum of one-time bonus points over the given achievement ids
    pub fn bonus_for<S: AsRef<str>>(&self, ids: &[S]) -> Result<u32, DomainError> {
        let mut bonus = 0;
        for id in ids {
            bonus += achievement_by_id(id.as_ref())?.points_bonus;
        }
        Ok(bonus)
    }
}
