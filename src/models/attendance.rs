//! Attendance status and per-day record models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The recorded outcome of a staff member's day.
///
/// A day with no record at all is "not recorded" and is modelled as
/// `Option::<AttendanceRecord>::None`, not as a status.
///
/// # Example
///
/// ```
/// use attendance_points::models::AttendanceStatus;
///
/// let status: AttendanceStatus = "field_work".parse().unwrap();
/// assert_eq!(status, AttendanceStatus::FieldWork);
/// assert!("holiday".parse::<AttendanceStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worked in the office; entry and exit times are recorded.
    Present,
    /// Worked in the field or the warehouse; a fixed full day is credited.
    FieldWork,
    /// Did not attend.
    Absent,
}

impl AttendanceStatus {
    /// Returns the wire/storage value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::FieldWork => "field_work",
            AttendanceStatus::Absent => "absent",
        }
    }

    /// Returns `true` for statuses that count as an attended day.
    pub fn is_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::FieldWork)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "present" => Ok(AttendanceStatus::Present),
            "field_work" => Ok(AttendanceStatus::FieldWork),
            "absent" => Ok(AttendanceStatus::Absent),
            other => Err(EngineError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// One staff member's attendance on one date.
///
/// Unique per `(staff, date)`. `duty_hours` and `points` are derived by the
/// scoring engine and never taken from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The staff member's roster name.
    pub staff: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// What happened that day.
    pub status: AttendanceStatus,
    /// Entry time text as submitted; set only for `present`.
    pub entry_time: Option<String>,
    /// Exit time text as submitted; set only for `present`.
    pub exit_time: Option<String>,
    /// Credited hours, 2 decimal places.
    pub duty_hours: Decimal,
    /// Free-text remarks; empty when none were given.
    #[serde(default)]
    pub remarks: String,
    /// Points earned (or lost) for the day.
    pub points: i64,
}

impl AttendanceRecord {
    /// Returns the store key for this record.
    pub fn key(&self) -> (String, NaiveDate) {
        (self.staff.clone(), self.date)
    }
}
