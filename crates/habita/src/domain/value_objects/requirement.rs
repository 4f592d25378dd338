//! Requirement - Typed achievement unlock condition
//!
//! The upstream data encodes requirements as `<kind>_<threshold>` strings
//! (`racha_7`, `habits_5`, `completed_100`, `points_1000`). Parsing happens
//! once, when the catalog is built; evaluation works on the typed variant.

use serde::{Deserialize, Serialize};

/// Special requirement kinds that are defined in the catalog but not yet
/// evaluated. They always report zero progress and stay locked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    /// Complete 10 habits before 8 AM (`early_bird_10`)
    EarlyBird,
    /// Complete every habit on a Saturday and Sunday (`weekend_warrior`)
    WeekendWarrior,
    /// Complete every habit of the day for 7 days straight (`perfect_week`)
    PerfectWeek,
}

/// Achievement unlock condition, with its numeric threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Highest global streak ever reached
    Streak(u32),
    /// Number of habits created
    HabitCount(u32),
    /// Total completions across all habits
    Completions(u32),
    /// Total points, achievement bonus included
    Points(u32),
    /// Not evaluated yet, permanently locked
    Special(SpecialKind),
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Streak(n) => write!(f, "racha_{}", n),
            Requirement::HabitCount(n) => write!(f, "habits_{}", n),
            Requirement::Completions(n) => write!(f, "completed_{}", n),
            Requirement::Points(n) => write!(f, "points_{}", n),
            Requirement::Special(SpecialKind::EarlyBird) => write!(f, "early_bird_10"),
            Requirement::Special(SpecialKind::WeekendWarrior) => write!(f, "weekend_warrior"),
            Requirement::Special(SpecialKind::PerfectWeek) => write!(f, "perfect_week"),
        }
    }
}

impl std::str::FromStr for Requirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Special kinds first, they do not follow the <kind>_<threshold> shape
        match s {
            "early_bird_10" => return Ok(Requirement::Special(SpecialKind::EarlyBird)),
            "weekend_warrior" => return Ok(Requirement::Special(SpecialKind::WeekendWarrior)),
            "perfect_week" => return Ok(Requirement::Special(SpecialKind::PerfectWeek)),
            _ => {}
        }

        let (kind, threshold) = s
            .rsplit_once('_')
            .ok_or_else(|| format!("Unknown requirement: {}", s))?;
        let threshold: u32 = threshold
            .parse()
            .map_err(|_| format!("Invalid requirement threshold: {}", s))?;

        match kind {
            "racha" => Ok(Requirement::Streak(threshold)),
            "habits" => Ok(Requirement::HabitCount(threshold)),
            "completed" => Ok(Requirement::Completions(threshold)),
            "points" => Ok(Requirement::Points(threshold)),
            _ => Err(format!("Unknown requirement kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_kinds() {
        assert_eq!("racha_7".parse(), Ok(Requirement::Streak(7)));
        assert_eq!("habits_5".parse(), Ok(Requirement::HabitCount(5)));
        assert_eq!("completed_500".parse(), Ok(Requirement::Completions(500)));
        assert_eq!("points_10000".parse(), Ok(Requirement::Points(10000)));
    }

    #[test]
    fn test_parse_special_kinds() {
        assert_eq!(
            "early_bird_10".parse(),
            Ok(Requirement::Special(SpecialKind::EarlyBird))
        );
        assert_eq!(
            "weekend_warrior".parse(),
            Ok(Requirement::Special(SpecialKind::WeekendWarrior))
        );
        assert_eq!(
            "perfect_week".parse(),
            Ok(Requirement::Special(SpecialKind::PerfectWeek))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for s in [
            "racha_30",
            "habits_20",
            "completed_100",
            "points_1000",
            "early_bird_10",
            "weekend_warrior",
            "perfect_week",
        ] {
            let req: Requirement = s.parse().unwrap();
            assert_eq!(req.to_string(), s);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("streak_7".parse::<Requirement>().is_err());
        assert!("racha_many".parse::<Requirement>().is_err());
        assert!("nonsense".parse::<Requirement>().is_err());
    }
}
