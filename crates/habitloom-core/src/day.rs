//! Calendar-day keys.
//!
//! Every "same day" comparison in the engine goes through [`DayKey`]: a
//! calendar day in UTC, formatted `YYYY-MM-DD`. UTC is the single timezone
//! policy for the whole system -- keys produced anywhere else would break
//! day-equality comparisons, so there is no local-time variant.
//!
//! Keys are always derived from a caller-supplied instant, never from the
//! system clock, so tests can pin "now".

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar day in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Day key for the calendar day containing `now`.
    pub fn from_instant(now: DateTime<Utc>) -> Self {
        DayKey(now.date_naive())
    }

    /// Day key for `now` shifted by `offset_days` (negative = past).
    pub fn from_instant_offset(now: DateTime<Utc>, offset_days: i64) -> Self {
        DayKey((now + Duration::days(offset_days)).date_naive())
    }

    /// Parse a `YYYY-MM-DD` key. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(DayKey)
    }

    /// Short weekday label (`Mon`..`Sun`) for chart axes.
    pub fn weekday_short(&self) -> &'static str {
        match self.0.weekday() {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn key_ignores_time_of_day() {
        assert_eq!(
            DayKey::from_instant(at(2024, 1, 1, 0)),
            DayKey::from_instant(at(2024, 1, 1, 23))
        );
    }

    #[test]
    fn key_formats_as_iso_date() {
        assert_eq!(DayKey::from_instant(at(2024, 3, 7, 12)).to_string(), "2024-03-07");
    }

    #[test]
    fn offset_crosses_month_boundaries() {
        let now = at(2024, 3, 1, 9);
        assert_eq!(
            DayKey::from_instant_offset(now, -1).to_string(),
            "2024-02-29"
        );
        assert_eq!(DayKey::from_instant_offset(now, 0), DayKey::from_instant(now));
    }

    #[test]
    fn parse_roundtrips_display() {
        let key = DayKey::parse("2024-01-03").unwrap();
        assert_eq!(key.to_string(), "2024-01-03");
        assert!(DayKey::parse("not-a-date").is_none());
        assert!(DayKey::parse("").is_none());
    }

    #[test]
    fn serde_uses_iso_string() {
        let key = DayKey::parse("2024-01-03").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-01-03\"");
        let back: DayKey = serde_json::from_str("\"2024-01-03\"").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn weekday_labels() {
        // 2024-01-01 was a Monday.
        assert_eq!(DayKey::parse("2024-01-01").unwrap().weekday_short(), "Mon");
        assert_eq!(DayKey::parse("2024-01-07").unwrap().weekday_short(), "Sun");
    }
}
