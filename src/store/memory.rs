//! In-memory attendance store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

use super::{AttendanceStore, RecordMap};

/// An [`AttendanceStore`] backed by a locked ordered map.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::{build_record, ScoringEngine};
/// use attendance_points::models::AttendanceStatus;
/// use attendance_points::store::{AttendanceStore, MemoryStore};
/// use chrono::NaiveDate;
///
/// let store = MemoryStore::new();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let record = build_record(
///     &ScoringEngine::default(), "Chen Wei", date, AttendanceStatus::Absent, None, None, None,
/// );
/// store.upsert(record).unwrap();
///
/// assert!(store.get("Chen Wei", date).unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<RecordMap>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> EngineError {
    EngineError::Store {
        message: "record lock poisoned".to_string(),
    }
}

impl AttendanceStore for MemoryStore {
    fn get(&self, staff: &str, date: NaiveDate) -> EngineResult<Option<AttendanceRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&(staff.to_string(), date)).cloned())
    }

    fn get_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<RecordMap> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .iter()
            .filter(|((_, date), _)| *date >= start && *date <= end)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<BTreeMap<_, _>>())
    }

    fn upsert(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(record.key(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(staff: &str, date: &str, status: AttendanceStatus, points: i64) -> AttendanceRecord {
        AttendanceRecord {
            staff: staff.to_string(),
            date: make_date(date),
            status,
            entry_time: None,
            exit_time: None,
            duty_hours: Decimal::ZERO,
            remarks: String::new(),
            points,
        }
    }

    #[test]
    fn test_get_missing_record_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("Chen Wei", make_date("2026-03-02")).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_upsert_replaces_same_key() {
        let store = MemoryStore::new();
        store
            .upsert(record("Chen Wei", "2026-03-02", AttendanceStatus::Absent, -5))
            .unwrap();
        store
            .upsert(record("Chen Wei", "2026-03-02", AttendanceStatus::FieldWork, 10))
            .unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.get("Chen Wei", make_date("2026-03-02")).unwrap().unwrap();
        assert_eq!(stored.status, AttendanceStatus::FieldWork);
        assert_eq!(stored.points, 10);
    }

    #[test]
    fn test_get_range_is_inclusive() {
        let store = MemoryStore::new();
        for date in ["2026-02-28", "2026-03-02", "2026-03-31", "2026-04-01"] {
            store
                .upsert(record("Chen Wei", date, AttendanceStatus::Absent, -5))
                .unwrap();
        }
        store
            .upsert(record("Dana Okafor", "2026-03-15", AttendanceStatus::Absent, -5))
            .unwrap();

        let march = store
            .get_range(make_date("2026-03-01"), make_date("2026-03-31"))
            .unwrap();
        assert_eq!(march.len(), 3);
        assert!(march.contains_key(&("Chen Wei".to_string(), make_date("2026-03-31"))));
        assert!(march.contains_key(&("Dana Okafor".to_string(), make_date("2026-03-15"))));
    }
}
