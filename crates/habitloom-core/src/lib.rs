//! # Habitloom Core Library
//!
//! This library provides the core business logic for the Habitloom habit
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary; any GUI is expected to be a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Completion Engine**: pure transformations over the habit record set;
//!   the caller supplies the current records and "now" on every call
//! - **Aggregation**: summary counts and the 7-day progress matrix
//! - **Storage**: SQLite-backed key-value persistence and TOML configuration
//! - **Tracker**: the command boundary wiring engine and store together
//!
//! ## Key Components
//!
//! - [`HabitTracker`]: load -> engine -> save command boundary
//! - [`engine`]: create / mark-completed / rename / delete rules
//! - [`WeeklyMatrix`]: chart-ready weekly completion matrix
//! - [`HabitStore`]: injectable persistence boundary

pub mod day;
pub mod engine;
pub mod error;
pub mod habit;
pub mod logging;
pub mod stats;
pub mod storage;
pub mod tracker;

pub use day::DayKey;
pub use error::{CoreError, StoreError, ValidationError};
pub use habit::{Frequency, HabitRecord};
pub use stats::{summarize, Summary, WeeklyMatrix, WeeklyRow};
pub use storage::{Config, Database, HabitStore, KvHabitStore, MemoryHabitStore};
pub use tracker::{Dashboard, HabitTracker};
