//! Habit records.
//!
//! [`HabitRecord`] is the sole persisted entity. Records serialize as
//! camelCase JSON so blobs written by earlier versions of the tracker load
//! unchanged; in those blobs "never completed" is the empty string and
//! `frequency` may be absent.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::day::DayKey;
use crate::error::ValidationError;

/// How often a habit is meant to recur.
///
/// Recorded and surfaced to consumers; the engine applies the same
/// once-per-day completion rule to both variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(ValidationError::UnknownFrequency(other.to_string())),
        }
    }
}

/// A single tracked habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecord {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    /// Display label, mutable via rename.
    pub name: String,
    #[serde(default)]
    pub frequency: Frequency,
    /// Count of distinct days on which the habit was completed.
    pub streak: u32,
    /// Day of the most recent completion; `None` = never completed.
    #[serde(default, deserialize_with = "de_last_completed")]
    pub last_completed: Option<DayKey>,
}

impl HabitRecord {
    /// Fresh record: new UUID, zero streak, never completed.
    pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            frequency,
            streak: 0,
            last_completed: None,
        }
    }

    /// True when the habit was marked completed on `day`.
    pub fn completed_on(&self, day: DayKey) -> bool {
        self.last_completed == Some(day)
    }
}

// Legacy blobs store "never completed" as "" rather than null.
fn de_last_completed<'de, D>(deserializer: D) -> Result<Option<DayKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => DayKey::parse(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid day key '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_pending() {
        let record = HabitRecord::new("Read", Frequency::Daily);
        assert_eq!(record.streak, 0);
        assert!(record.last_completed.is_none());
        assert!(!record.id.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let a = HabitRecord::new("Read", Frequency::Daily);
        let b = HabitRecord::new("Read", Frequency::Daily);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn frequency_parses_case_insensitively() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!(" Weekly ".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let mut record = HabitRecord::new("Read", Frequency::Daily);
        record.last_completed = DayKey::parse("2024-01-01");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["lastCompleted"], "2024-01-01");
        assert_eq!(json["frequency"], "daily");
    }

    #[test]
    fn legacy_empty_string_means_never_completed() {
        let json = r#"{
            "id": "1700000000000",
            "name": "Read",
            "frequency": "daily",
            "streak": 0,
            "lastCompleted": ""
        }"#;
        let record: HabitRecord = serde_json::from_str(json).unwrap();
        assert!(record.last_completed.is_none());
    }

    #[test]
    fn legacy_blob_without_frequency_defaults_to_daily() {
        let json = r#"{
            "id": "1700000000001",
            "name": "Stretch",
            "streak": 3,
            "lastCompleted": "2024-01-01"
        }"#;
        let record: HabitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.frequency, Frequency::Daily);
        assert_eq!(record.last_completed, DayKey::parse("2024-01-01"));
    }

    #[test]
    fn completed_on_compares_day_keys() {
        let mut record = HabitRecord::new("Read", Frequency::Daily);
        record.last_completed = DayKey::parse("2024-01-01");
        assert!(record.completed_on(DayKey::parse("2024-01-01").unwrap()));
        assert!(!record.completed_on(DayKey::parse("2024-01-02").unwrap()));
    }
}
