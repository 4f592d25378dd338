//! Recompute Service - The post-mutation derivation transaction
//!
//! After any mutation that can change completions, habit count or points,
//! derived state must be rebuilt as one logical step: recompute, diff the
//! unlocked achievement set against the previously stored one, award each
//! newly unlocked bonus exactly once, then recompute totals and level.
//! Interleaving two of these per user can duplicate or lose bonus awards,
//! so callers commit the returned outcome as a single unit.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{achievement_by_id, DomainError, Habit, UserProfile};
use crate::ports::Clock;
use crate::services::achievements::AchievementChecker;
use crate::services::analytics::Analytics;

/// Result of one recompute transaction
#[derive(Debug, Clone, Serialize)]
pub struct RecomputeOutcome {
    /// Updated profile snapshot, ready to persist
    pub profile: UserProfile,
    /// Habits with cached streak fields refreshed
    pub habits: Vec<Habit>,
    /// Achievements that transitioned from locked to unlocked, catalog order
    pub newly_unlocked: Vec<String>,
    /// One-time bonus points awarded by this transaction
    pub bonus_awarded: u32,
}

/// Runs the full derivation pipeline over a habit collection
pub struct Recomputer {
    analytics: Analytics,
    checker: AchievementChecker,
}

impl Recomputer {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            analytics: Analytics::new(clock),
            checker: AchievementChecker::new(),
        }
    }

    /// Recompute against the local system date
    pub fn system() -> Self {
        Self {
            analytics: Analytics::system(),
            checker: AchievementChecker::new(),
        }
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn checker(&self) -> &AchievementChecker {
        &self.checker
    }

    /// Rebuild all derived state from the habit collection and the stored
    /// profile. Pure: the caller owns committing the outcome.
    pub fn recompute(
        &self,
        habits: &[Habit],
        profile: &UserProfile,
    ) -> Result<RecomputeOutcome, DomainError> {
        let base_points = self.analytics.total_points(habits);
        let current_streak = self.analytics.global_streak(habits);
        // max_streak never decreases across recomputations
        let max_streak = self
            .analytics
            .global_max_streak(habits)
            .max(profile.max_streak);

        let previous: BTreeSet<String> = profile.unlocked_achievements.iter().cloned().collect();
        let unlocked = self.checker.unlocked_set(
            habits,
            base_points + profile.achievement_points,
            max_streak,
        );

        let newly_unlocked = self.checker.newly_unlocked(&previous, &unlocked);
        let bonus_awarded = self.checker.bonus_for(&newly_unlocked)?;
        for id in &newly_unlocked {
            let achievement = achievement_by_id(id)?;
            tracing::info!(
                id = achievement.id,
                name = achievement.name,
                bonus = achievement.points_bonus,
                "Achievement unlocked"
            );
        }

        let achievement_points = profile.achievement_points + bonus_awarded;
        let total_points = base_points + achievement_points;
        let level = self.analytics.level(total_points);

        tracing::debug!(
            base_points,
            total_points,
            current_streak,
            max_streak,
            unlocked = unlocked.len(),
            "Recompute finished"
        );

        let updated = UserProfile {
            total_points,
            level,
            current_streak,
            max_streak,
            unlocked_achievements: unlocked.into_iter().collect(),
            achievement_points,
            ..profile.clone()
        };

        Ok(RecomputeOutcome {
            profile: updated,
            habits: self.analytics.refresh_streaks(habits.to_vec()),
            newly_unlocked,
            bonus_awarded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn recomputer_at(today: &str) -> Recomputer {
        let today = NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap();
        Recomputer::new(Box::new(FixedClock::new(today)))
    }

    fn habit(id: &str, points: u32, dates: &[&str]) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("habit {}", id),
            description: String::new(),
            category: "test".to_string(),
            frequency: 7,
            completed_dates: dates.iter().map(|d| d.to_string()).collect(),
            streak: 0,
            last_completed: None,
            points,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_collection_yields_neutral_state() {
        let recomputer = recomputer_at("2024-01-07");
        let outcome = recomputer
            .recompute(&[], &UserProfile::default())
            .unwrap();
        assert_eq!(outcome.profile.total_points, 0);
        assert_eq!(outcome.profile.level, 1);
        assert_eq!(outcome.profile.current_streak, 0);
        assert!(outcome.newly_unlocked.is_empty());
        assert_eq!(outcome.bonus_awarded, 0);
    }

    #[test]
    fn test_week_long_streak_awards_first_week() {
        let recomputer = recomputer_at("2024-01-07");
        let habits = vec![habit(
            "a",
            10,
            &[
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-05",
                "2024-01-06",
                "2024-01-07",
            ],
        )];

        let outcome = recomputer
            .recompute(&habits, &UserProfile::default())
            .unwrap();

        assert_eq!(outcome.profile.current_streak, 7);
        assert_eq!(outcome.profile.max_streak, 7);
        // 71 habit points + 50 for "First Week"
        assert!(outcome.newly_unlocked.contains(&"1".to_string()));
        assert_eq!(outcome.bonus_awarded, 50);
        assert_eq!(outcome.profile.achievement_points, 50);
        assert_eq!(outcome.profile.total_points, 121);
        assert_eq!(outcome.profile.level, 2);
        assert_eq!(outcome.habits[0].streak, 7);
    }

    #[test]
    fn test_recompute_is_idempotent_on_unchanged_input() {
        let recomputer = recomputer_at("2024-01-07");
        let habits = vec![habit("a", 10, &["2024-01-06", "2024-01-07"])];

        let first = recomputer
            .recompute(&habits, &UserProfile::default())
            .unwrap();
        let second = recomputer.recompute(&habits, &first.profile).unwrap();

        assert!(second.newly_unlocked.is_empty());
        assert_eq!(second.bonus_awarded, 0);
        assert_eq!(second.profile.total_points, first.profile.total_points);
        assert_eq!(
            second.profile.unlocked_achievements,
            first.profile.unlocked_achievements
        );
    }

    #[test]
    fn test_max_streak_never_decreases() {
        let recomputer = recomputer_at("2024-01-07");
        let profile = UserProfile {
            max_streak: 30,
            ..UserProfile::default()
        };
        let habits = vec![habit("a", 10, &["2024-01-07"])];

        let outcome = recomputer.recompute(&habits, &profile).unwrap();
        assert_eq!(outcome.profile.max_streak, 30);
    }

    #[test]
    fn test_stored_max_streak_feeds_streak_achievements() {
        // A historical 30-day streak keeps racha_30 unlocked even though
        // the current completion log no longer shows it.
        let recomputer = recomputer_at("2024-01-07");
        let profile = UserProfile {
            max_streak: 30,
            ..UserProfile::default()
        };
        let outcome = recomputer
            .recompute(&[habit("a", 10, &["2024-01-07"])], &profile)
            .unwrap();
        assert!(outcome
            .profile
            .unlocked_achievements
            .contains(&"2".to_string()));
        // 50 (racha_7) + 200 (racha_30)
        assert_eq!(outcome.bonus_awarded, 250);
    }

    #[test]
    fn test_bonus_points_count_toward_points_achievements() {
        // 9 completions x 10 points = 90 base, below points_100. The
        // habit-count bonus pushes the running total past it on the next
        // recompute, because the checker sees base + achievement points.
        let recomputer = recomputer_at("2024-01-09");
        let dates: Vec<String> = (1..=9).map(|d| format!("2024-01-{:02}", d)).collect();
        let habits: Vec<Habit> = (0..5)
            .map(|i| Habit {
                id: format!("h{}", i),
                completed_dates: if i == 0 { dates.clone() } else { Vec::new() },
                ..habit("x", 10, &[])
            })
            .collect();

        let first = recomputer
            .recompute(&habits, &UserProfile::default())
            .unwrap();
        // 91 base points: racha_7 and habits_5 unlock, points_100 not yet
        assert!(first.newly_unlocked.contains(&"1".to_string()));
        assert!(first.newly_unlocked.contains(&"4".to_string()));
        assert!(!first.newly_unlocked.contains(&"10".to_string()));
        assert_eq!(first.profile.achievement_points, 150);
        assert_eq!(first.profile.total_points, 241);

        let second = recomputer.recompute(&habits, &first.profile).unwrap();
        assert_eq!(second.newly_unlocked, vec!["10".to_string()]);
        assert_eq!(second.bonus_awarded, 20);
        assert_eq!(second.profile.total_points, 261);
    }
}
