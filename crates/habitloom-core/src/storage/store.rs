//! Habit store adapter.
//!
//! The persistence boundary for habit records: load the whole collection,
//! save the whole collection. No partial-update API exists, so callers that
//! could race must serialize their load -> compute -> save sequence.

use std::cell::RefCell;

use crate::error::StoreError;
use crate::habit::HabitRecord;

use super::database::Database;

/// Key under which the habit list is stored.
const HABITS_KEY: &str = "habits";

/// Whole-collection persistence boundary for habit records.
///
/// Owns serialization only; no business rules live behind this trait.
pub trait HabitStore {
    /// Load the full record list. An empty store yields an empty list.
    fn load(&self) -> Result<Vec<HabitRecord>, StoreError>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[HabitRecord]) -> Result<(), StoreError>;
}

/// [`HabitStore`] backed by the SQLite key-value table.
///
/// The record list is one JSON document under the `habits` key.
pub struct KvHabitStore {
    db: Database,
}

impl KvHabitStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the store at the default data directory.
    ///
    /// # Errors
    /// Returns an error if the backing database cannot be opened.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::new(Database::open()?))
    }

    /// Open an in-memory store (for tests).
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self::new(Database::open_memory()?))
    }
}

impl HabitStore for KvHabitStore {
    fn load(&self) -> Result<Vec<HabitRecord>, StoreError> {
        match self.db.kv_get(HABITS_KEY)? {
            Some(json) => {
                let records: Vec<HabitRecord> = serde_json::from_str(&json)?;
                log::debug!("loaded {} habit record(s)", records.len());
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[HabitRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.db.kv_set(HABITS_KEY, &json)?;
        log::debug!("saved {} habit record(s)", records.len());
        Ok(())
    }
}

/// In-memory [`HabitStore`] for tests and embedding consumers.
#[derive(Default)]
pub struct MemoryHabitStore {
    records: RefCell<Vec<HabitRecord>>,
}

impl MemoryHabitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HabitStore for MemoryHabitStore {
    fn load(&self) -> Result<Vec<HabitRecord>, StoreError> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[HabitRecord]) -> Result<(), StoreError> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayKey;
    use crate::habit::Frequency;

    fn habit(name: &str, last: Option<&str>) -> HabitRecord {
        let mut record = HabitRecord::new(name, Frequency::Daily);
        record.last_completed = last.and_then(DayKey::parse);
        record
    }

    #[test]
    fn empty_kv_store_loads_empty_list() {
        let store = KvHabitStore::open_memory().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn kv_store_roundtrips_records() {
        let store = KvHabitStore::open_memory().unwrap();
        let records = vec![habit("Read", Some("2024-01-01")), habit("Stretch", None)];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn kv_store_save_replaces_collection() {
        let store = KvHabitStore::open_memory().unwrap();
        store.save(&[habit("Read", None)]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn kv_store_rejects_corrupt_blob() {
        let store = KvHabitStore::open_memory().unwrap();
        store.db.kv_set("habits", "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn kv_store_loads_legacy_blob() {
        // Shape written by the original web client: camelCase, empty-string
        // sentinel for "never completed", millisecond-timestamp ids.
        let store = KvHabitStore::open_memory().unwrap();
        store
            .db
            .kv_set(
                "habits",
                r#"[{"id":"1700000000000","name":"Read","frequency":"daily","streak":2,"lastCompleted":""}]"#,
            )
            .unwrap();
        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Read");
        assert_eq!(records[0].streak, 2);
        assert!(records[0].last_completed.is_none());
    }

    #[test]
    fn memory_store_roundtrips() {
        let store = MemoryHabitStore::new();
        assert!(store.load().unwrap().is_empty());
        let records = vec![habit("Read", None)];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }
}
