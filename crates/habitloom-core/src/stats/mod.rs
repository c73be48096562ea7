//! Aggregation module for Habitloom
//!
//! This module projects the raw habit record set into derived views: the
//! summary counts shown at the top of a dashboard and the weekly completion
//! matrix behind the progress chart. Everything here is recomputed from the
//! records and an explicit "now" on every call -- nothing is cached.

mod weekly;

pub use weekly::{WeeklyMatrix, WeeklyRow};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::DayKey;
use crate::habit::HabitRecord;

/// Record-set summary counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of habits in the set.
    pub total: usize,
    /// Habits whose last completion falls on the day of "now".
    pub completed_today: usize,
}

/// Count habits and how many were completed on the calendar day of `now`.
pub fn summarize(records: &[HabitRecord], now: DateTime<Utc>) -> Summary {
    let today = DayKey::from_instant(now);
    Summary {
        total: records.len(),
        completed_today: records.iter().filter(|r| r.completed_on(today)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::Frequency;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn habit(name: &str, last: Option<&str>) -> HabitRecord {
        let mut record = HabitRecord::new(name, Frequency::Daily);
        record.last_completed = last.and_then(DayKey::parse);
        record
    }

    #[test]
    fn empty_set_summarizes_to_zero() {
        assert_eq!(summarize(&[], at(2024, 1, 1, 9)), Summary::default());
    }

    #[test]
    fn counts_only_completions_on_the_day_of_now() {
        let records = vec![
            habit("Read", Some("2024-01-03")),
            habit("Stretch", Some("2024-01-02")),
            habit("Journal", None),
        ];
        let summary = summarize(&records, at(2024, 1, 3, 9));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed_today, 1);
    }

    #[test]
    fn completed_today_never_exceeds_total() {
        let records = vec![
            habit("Read", Some("2024-01-03")),
            habit("Stretch", Some("2024-01-03")),
        ];
        let summary = summarize(&records, at(2024, 1, 3, 23));
        assert_eq!(summary.completed_today, 2);
        assert!(summary.completed_today <= summary.total);
    }
}
