//! Analytics Service - Streaks, points, levels and activity
//!
//! Pure derivations over habit completion logs. Cached `streak` fields on
//! the records are never trusted; everything is recomputed from
//! `completed_dates` through the injected clock's notion of "today".

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{DaySet, Habit};
use crate::ports::{Clock, SystemClock};

/// Points needed to advance one level
const POINTS_PER_LEVEL: u32 = 100;

/// Streak length that earns one 10% bonus increment
const STREAK_BONUS_PERIOD: u32 = 7;

/// One histogram entry of the weekly activity view
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayActivity {
    /// Weekday abbreviation ("Mon", "Tue", ...)
    pub day: String,
    /// The calendar day this entry covers
    pub date: NaiveDate,
    /// Habits completed on that day
    pub completed: u32,
}

/// Progress against the user's daily goal
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GoalProgress {
    pub completed: u32,
    pub goal: u32,
    pub remaining: u32,
    /// 0-100, capped
    pub percent: u32,
}

/// Stateless analytics over a habit collection
pub struct Analytics {
    clock: Box<dyn Clock>,
}

impl Analytics {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Analytics against the local system date
    pub fn system() -> Self {
        Self::new(Box::new(SystemClock))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current consecutive-day streak of a single habit
    pub fn habit_streak(&self, habit: &Habit) -> u32 {
        current_streak(&habit.day_set(), self.today())
    }

    /// Longest run of consecutive days in a habit's history
    pub fn habit_max_streak(&self, habit: &Habit) -> u32 {
        max_streak(&habit.day_set())
    }

    /// Consecutive days on which at least one habit was completed
    pub fn global_streak(&self, habits: &[Habit]) -> u32 {
        current_streak(&union_of(habits), self.today())
    }

    /// Longest any-habit run ever observed
    pub fn global_max_streak(&self, habits: &[Habit]) -> u32 {
        max_streak(&union_of(habits))
    }

    /// Habit-derived points: completions times base points, plus a 10%
    /// base-point bonus per full week of current streak. Achievement bonus
    /// points are tracked separately by the caller and are not included.
    pub fn total_points(&self, habits: &[Habit]) -> u32 {
        let today = self.today();
        let mut total = 0.0_f64;
        for habit in habits {
            let days = habit.day_set();
            let streak = current_streak(&days, today);
            total += days.len() as f64 * habit.points as f64;
            total += (streak / STREAK_BONUS_PERIOD) as f64 * habit.points as f64 * 0.1;
        }
        total.floor() as u32
    }

    /// Level from total points: one level per 100 points, starting at 1
    pub fn level(&self, total_points: u32) -> u32 {
        total_points / POINTS_PER_LEVEL + 1
    }

    /// Progress toward the next level as a 0-100 percentage
    pub fn level_progress(&self, total_points: u32) -> u32 {
        total_points % POINTS_PER_LEVEL
    }

    /// Sum of every habit's completion count
    pub fn total_completions(&self, habits: &[Habit]) -> u32 {
        habits.iter().map(|h| h.day_set().len() as u32).sum()
    }

    /// Habits completed per day over the last 7 days, oldest to newest,
    /// ending at today. Each day's count is independent, not cumulative.
    pub fn weekly_activity(&self, habits: &[Habit]) -> Vec<DayActivity> {
        let today = self.today();
        let day_sets: Vec<DaySet> = habits.iter().map(Habit::day_set).collect();

        (0..7)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let completed = day_sets.iter().filter(|set| set.contains(date)).count() as u32;
                DayActivity {
                    day: date.format("%a").to_string(),
                    date,
                    completed,
                }
            })
            .collect()
    }

    /// Habits whose completion set contains today
    pub fn completed_today(&self, habits: &[Habit]) -> u32 {
        let today = self.today();
        habits.iter().filter(|h| h.day_set().contains(today)).count() as u32
    }

    /// True when every habit was completed today (the "all done" signal
    /// consumed by the notification layer)
    pub fn all_completed_today(&self, habits: &[Habit]) -> bool {
        !habits.is_empty() && self.completed_today(habits) as usize == habits.len()
    }

    /// Progress against the per-day habit goal
    pub fn daily_goal_progress(&self, habits: &[Habit], goal: u32) -> GoalProgress {
        let completed = self.completed_today(habits);
        let percent = if goal == 0 {
            100
        } else {
            (completed * 100 / goal).min(100)
        };
        GoalProgress {
            completed,
            goal,
            remaining: goal.saturating_sub(completed),
            percent,
        }
    }

    /// Rewrite every habit's cached `streak` and `last_completed` from its
    /// completion log. The caller decides whether to persist the result.
    pub fn refresh_streaks(&self, habits: Vec<Habit>) -> Vec<Habit> {
        let today = self.today();
        habits
            .into_iter()
            .map(|mut habit| {
                let days = habit.day_set();
                habit.streak = current_streak(&days, today);
                habit.last_completed = days.latest();
                habit
            })
            .collect()
    }
}

fn union_of(habits: &[Habit]) -> DaySet {
    let sets: Vec<DaySet> = habits.iter().map(Habit::day_set).collect();
    DaySet::union(&sets)
}

/// Consecutive-day streak ending at `today`, with one day of grace: a run
/// whose most recent day is yesterday still counts (the user just has not
/// logged today yet). Anything older means the streak is broken.
fn current_streak(days: &DaySet, today: NaiveDate) -> u32 {
    let latest = match days.latest() {
        Some(day) => day,
        None => return 0,
    };

    let yesterday = today - Duration::days(1);
    let mut expected = if latest == today {
        today
    } else if latest == yesterday {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    for day in days.iter_descending() {
        if day == expected {
            streak += 1;
            expected = expected - Duration::days(1);
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive days anywhere in the set, active or not
fn max_streak(days: &DaySet) -> u32 {
    if days.is_empty() {
        return 0;
    }

    let mut best = 1;
    let mut run = 1;
    let mut previous: Option<NaiveDate> = None;

    for day in days.iter_ascending() {
        if let Some(prev) = previous {
            if (day - prev).num_days() == 1 {
                run += 1;
                best = best.max(run);
            } else {
                run = 1;
            }
        }
        previous = Some(day);
    }

    best
}
