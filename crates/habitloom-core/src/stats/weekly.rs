//! Weekly progress matrix.
//!
//! Projects habit records onto the 7 calendar days ending at "now": one row
//! per habit, one binary slot per day, oldest day first. Because a record
//! retains only its single most recent completion date, at most one slot per
//! row can be set -- the matrix reproduces exactly what the records know,
//! it does not synthesize a fuller history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day::DayKey;
use crate::habit::HabitRecord;

/// Number of days in the progress window.
pub const WINDOW_DAYS: usize = 7;

/// One habit's completion slots across the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRow {
    pub name: String,
    /// 0/1 per day, index 0 = oldest day, index 6 = the day of "now".
    pub days: [u8; WINDOW_DAYS],
}

/// Seven-day completion matrix ending on the day of `now`.
///
/// Rows preserve record insertion order; no sort is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMatrix {
    /// The day axis, chronological ascending.
    pub days: [DayKey; WINDOW_DAYS],
    pub rows: Vec<WeeklyRow>,
}

impl WeeklyMatrix {
    /// Build the matrix from the current record set and `now`.
    pub fn build(records: &[HabitRecord], now: DateTime<Utc>) -> Self {
        let days: [DayKey; WINDOW_DAYS] = std::array::from_fn(|i| {
            DayKey::from_instant_offset(now, i as i64 - (WINDOW_DAYS as i64 - 1))
        });

        let rows = records
            .iter()
            .map(|record| WeeklyRow {
                name: record.name.clone(),
                days: std::array::from_fn(|i| u8::from(record.completed_on(days[i]))),
            })
            .collect();

        Self { days, rows }
    }

    /// Row for a habit name, if present.
    pub fn row(&self, name: &str) -> Option<&WeeklyRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Short weekday label per day column.
    pub fn day_labels(&self) -> [&'static str; WINDOW_DAYS] {
        std::array::from_fn(|i| self.days[i].weekday_short())
    }

    /// Render the matrix as a terminal chart.
    pub fn render_ascii(&self) -> String {
        let mut output = String::new();

        output.push_str("Weekly Habit Progress\n");

        if self.rows.is_empty() {
            output.push_str("No habits tracked yet.\n");
            return output;
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        // Header row with weekday labels.
        output.push_str(&format!("{:<name_width$}", ""));
        for label in self.day_labels() {
            output.push_str(&format!(" {label:>3}"));
        }
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!("{:<name_width$}", row.name));
            for &slot in &row.days {
                output.push_str(if slot == 1 { "   █" } else { "   ·" });
            }
            output.push('\n');
        }

        output
    }
}
