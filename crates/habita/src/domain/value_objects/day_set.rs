//! DaySet - Normalized set of completion days
//!
//! Habit records carry completion days as raw `YYYY-MM-DD` strings in no
//! particular order, possibly with duplicates. All engine math runs on a
//! `DaySet`: deduplicated, ascending-sorted `NaiveDate`s.
//!
//! Malformed day strings are a data-integrity fault of the upstream layer.
//! The default constructor skips them with a warning so a single bad record
//! cannot take down every derivation; `parse_strict` is available for
//! callers that prefer a hard error.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::errors::DomainError;

/// Deduplicated, ordered set of calendar days
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySet {
    days: BTreeSet<NaiveDate>,
}

impl DaySet {
    /// Build from raw day strings, skipping malformed entries with a warning
    pub fn from_strings<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut days = BTreeSet::new();
        for value in raw {
            match parse_day(value.as_ref()) {
                Ok(day) => {
                    days.insert(day);
                }
                Err(_) => {
                    tracing::warn!(value = value.as_ref(), "Skipping malformed completion day");
                }
            }
        }
        Self { days }
    }

    /// Build from raw day strings, failing on the first malformed entry
    pub fn parse_strict<S: AsRef<str>>(raw: &[S]) -> Result<Self, DomainError> {
        let mut days = BTreeSet::new();
        for value in raw {
            days.insert(parse_day(value.as_ref())?);
        }
        Ok(Self { days })
    }

    /// Union of several sets (e.g. "any habit completed this day")
    pub fn union<'a, I: IntoIterator<Item = &'a DaySet>>(sets: I) -> Self {
        let mut days = BTreeSet::new();
        for set in sets {
            days.extend(set.days.iter().copied());
        }
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    /// Most recent day in the set, if any
    pub fn latest(&self) -> Option<NaiveDate> {
        self.days.iter().next_back().copied()
    }

    /// Days in ascending calendar order
    pub fn iter_ascending(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Days in descending calendar order (most recent first)
    pub fn iter_descending(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().rev().copied()
    }
}

/// Parse a single `YYYY-MM-DD` day string
pub fn parse_day(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DomainError::malformed_date(value))
}
