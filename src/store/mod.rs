//! Attendance record storage.
//!
//! The engine treats storage as a key-value store keyed by
//! `(staff, date)` with upsert semantics. [`MemoryStore`] is the bundled
//! implementation; anything implementing [`AttendanceStore`] can replace it.

mod memory;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

pub use memory::MemoryStore;

/// Records keyed by `(staff, date)`.
pub type RecordMap = BTreeMap<(String, NaiveDate), AttendanceRecord>;

/// Persists and retrieves attendance records.
///
/// Writes to the same `(staff, date)` key are last-write-wins.
pub trait AttendanceStore: Send + Sync {
    /// Fetches one staff member's record for a date, if recorded.
    fn get(&self, staff: &str, date: NaiveDate) -> EngineResult<Option<AttendanceRecord>>;

    /// Fetches every record dated from `start` to `end` inclusive.
    fn get_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<RecordMap>;

    /// Inserts the record, replacing any existing one for the same key.
    fn upsert(&self, record: AttendanceRecord) -> EngineResult<()>;
}
