//! Completion engine.
//!
//! Pure transformations over the habit record set: every operation takes the
//! current records plus its inputs and returns the next record set.
//! Persistence and clock reads stay with the caller, so each function is a
//! deterministic `(records, now, args) -> records'` step.
//!
//! The central invariant lives in [`mark_completed`]: a habit already
//! completed on the calendar day of `now` is returned unchanged, so repeated
//! completions within one day can never inflate the streak.

use chrono::{DateTime, Utc};

use crate::day::DayKey;
use crate::error::{CoreError, Result, ValidationError};
use crate::habit::{Frequency, HabitRecord};

/// Append a new habit with a fresh id, zero streak, and no completion date.
///
/// # Errors
/// `ValidationError::EmptyName` if `name` trims empty.
pub fn create(
    mut records: Vec<HabitRecord>,
    name: &str,
    frequency: Frequency,
) -> Result<Vec<HabitRecord>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    records.push(HabitRecord::new(name, frequency));
    Ok(records)
}

/// Record a completion for the habit `id` on the calendar day of `now`.
///
/// Idempotent within a day: if the habit is already completed today the set
/// is returned unchanged. Otherwise the streak increments by exactly 1 and
/// `last_completed` moves to today -- a gap of several days still increments
/// by 1 rather than resetting.
///
/// # Errors
/// `CoreError::NotFound` if no record has `id`.
pub fn mark_completed(
    mut records: Vec<HabitRecord>,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Vec<HabitRecord>> {
    let today = DayKey::from_instant(now);
    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

    if !record.completed_on(today) {
        record.streak += 1;
        record.last_completed = Some(today);
    }
    Ok(records)
}

/// Replace the name of the habit `id`, preserving all other fields.
///
/// # Errors
/// `ValidationError::EmptyName` if `new_name` trims empty;
/// `CoreError::NotFound` if no record has `id`.
pub fn rename(mut records: Vec<HabitRecord>, id: &str, new_name: &str) -> Result<Vec<HabitRecord>> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
    record.name = new_name.to_string();
    Ok(records)
}

/// Remove the habit `id`. Deleting an unknown id is a successful no-op.
pub fn delete(mut records: Vec<HabitRecord>, id: &str) -> Vec<HabitRecord> {
    records.retain(|r| r.id != id);
    records
}
