//! Habit tracker command boundary.
//!
//! [`HabitTracker`] wires the completion engine to an injected store: every
//! command is one `load -> engine op -> save` round trip, returning the
//! refreshed [`Dashboard`] so consumers can redraw without a second read.
//!
//! The tracker never reads the clock; callers pass `now` explicitly. It also
//! holds no record state between calls -- the store owns the collection, and
//! each command works on a fresh snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine;
use crate::error::Result;
use crate::habit::{Frequency, HabitRecord};
use crate::stats::{summarize, Summary, WeeklyMatrix};
use crate::storage::HabitStore;

/// Summary plus weekly matrix, recomputed after every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub weekly: WeeklyMatrix,
}

impl Dashboard {
    fn build(records: &[HabitRecord], now: DateTime<Utc>) -> Self {
        Self {
            summary: summarize(records, now),
            weekly: WeeklyMatrix::build(records, now),
        }
    }
}

/// Consumer-facing facade over the engine and a backing store.
pub struct HabitTracker<S: HabitStore> {
    store: S,
}

impl<S: HabitStore> HabitTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The current record list, straight from the store.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn habits(&self) -> Result<Vec<HabitRecord>> {
        Ok(self.store.load()?)
    }

    /// Summary and weekly matrix for the record set as of `now`.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn dashboard(&self, now: DateTime<Utc>) -> Result<Dashboard> {
        let records = self.store.load()?;
        Ok(Dashboard::build(&records, now))
    }

    /// Create a habit and persist the new set.
    ///
    /// # Errors
    /// Validation failure on a blank name; store failures.
    pub fn create_habit(
        &self,
        name: &str,
        frequency: Frequency,
        now: DateTime<Utc>,
    ) -> Result<Dashboard> {
        log::info!("create habit '{}' ({frequency})", name.trim());
        self.apply(now, |records| engine::create(records, name, frequency))
    }

    /// Mark the habit `id` completed on the day of `now` and persist.
    ///
    /// # Errors
    /// `NotFound` on an unknown id; store failures.
    pub fn mark_habit_completed(&self, id: &str, now: DateTime<Utc>) -> Result<Dashboard> {
        log::info!("mark habit {id} completed");
        self.apply(now, |records| engine::mark_completed(records, id, now))
    }

    /// Rename the habit `id` and persist.
    ///
    /// # Errors
    /// Validation failure on a blank name; `NotFound` on an unknown id;
    /// store failures.
    pub fn rename_habit(&self, id: &str, new_name: &str, now: DateTime<Utc>) -> Result<Dashboard> {
        log::info!("rename habit {id}");
        self.apply(now, |records| engine::rename(records, id, new_name))
    }

    /// Delete the habit `id` and persist. Unknown ids are a no-op.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn delete_habit(&self, id: &str, now: DateTime<Utc>) -> Result<Dashboard> {
        log::info!("delete habit {id}");
        self.apply(now, |records| Ok(engine::delete(records, id)))
    }

    fn apply(
        &self,
        now: DateTime<Utc>,
        op: impl FnOnce(Vec<HabitRecord>) -> Result<Vec<HabitRecord>>,
    ) -> Result<Dashboard> {
        let records = self.store.load()?;
        let records = op(records)?;
        self.store.save(&records)?;
        Ok(Dashboard::build(&records, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayKey;
    use crate::error::{CoreError, ValidationError};
    use crate::storage::MemoryHabitStore;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn tracker() -> HabitTracker<MemoryHabitStore> {
        HabitTracker::new(MemoryHabitStore::new())
    }

    #[test]
    fn create_persists_and_returns_dashboard() {
        let tracker = tracker();
        let now = at(2024, 1, 1, 9);
        let dashboard = tracker.create_habit("Read", Frequency::Daily, now).unwrap();
        assert_eq!(dashboard.summary.total, 1);
        assert_eq!(dashboard.summary.completed_today, 0);
        assert_eq!(tracker.habits().unwrap().len(), 1);
    }

    #[test]
    fn failed_command_leaves_store_untouched() {
        let tracker = tracker();
        let now = at(2024, 1, 1, 9);
        tracker.create_habit("Read", Frequency::Daily, now).unwrap();
        let err = tracker.create_habit("  ", Frequency::Daily, now).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyName)
        ));
        assert_eq!(tracker.habits().unwrap().len(), 1);
    }

    #[test]
    fn mark_completed_updates_summary_and_matrix() {
        let tracker = tracker();
        let now = at(2024, 1, 7, 9);
        tracker.create_habit("Read", Frequency::Daily, now).unwrap();
        let id = tracker.habits().unwrap()[0].id.clone();

        let dashboard = tracker.mark_habit_completed(&id, now).unwrap();
        assert_eq!(dashboard.summary.completed_today, 1);
        assert_eq!(
            dashboard.weekly.row("Read").unwrap().days,
            [0, 0, 0, 0, 0, 0, 1]
        );

        let records = tracker.habits().unwrap();
        assert_eq!(records[0].streak, 1);
        assert_eq!(records[0].last_completed, Some(DayKey::from_instant(now)));
    }

    #[test]
    fn rename_then_delete_round_trip() {
        let tracker = tracker();
        let now = at(2024, 1, 1, 9);
        tracker.create_habit("Read", Frequency::Daily, now).unwrap();
        let id = tracker.habits().unwrap()[0].id.clone();

        tracker.rename_habit(&id, "Read books", now).unwrap();
        assert_eq!(tracker.habits().unwrap()[0].name, "Read books");

        let dashboard = tracker.delete_habit(&id, now).unwrap();
        assert_eq!(dashboard.summary.total, 0);
        assert!(tracker.habits().unwrap().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_a_successful_noop() {
        let tracker = tracker();
        let now = at(2024, 1, 1, 9);
        tracker.create_habit("Read", Frequency::Daily, now).unwrap();
        let dashboard = tracker.delete_habit("missing", now).unwrap();
        assert_eq!(dashboard.summary.total, 1);
    }

    #[test]
    fn dashboard_is_pure_read() {
        let tracker = tracker();
        let now = at(2024, 1, 1, 9);
        tracker.create_habit("Read", Frequency::Daily, now).unwrap();
        let before = tracker.habits().unwrap();
        let _ = tracker.dashboard(now).unwrap();
        assert_eq!(tracker.habits().unwrap(), before);
    }
}
