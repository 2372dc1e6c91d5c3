//! Validation of raw attendance input and conversion into records.
//!
//! This is the input boundary: status text is parsed here, staff names are
//! checked against the roster and rest days are refused, so the scoring
//! engine only ever sees valid statuses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RosterConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

use super::scoring::ScoringEngine;
use super::working_days::RestDayRule;

/// One staff member's raw attendance as submitted.
///
/// An entry without a status is left unrecorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySubmission {
    /// Roster name.
    pub staff: String,
    /// `present`, `field_work` or `absent`; `None` or blank to skip.
    #[serde(default)]
    pub status: Option<String>,
    /// `HH:MM`; only kept for `present`.
    #[serde(default)]
    pub entry_time: Option<String>,
    /// `HH:MM`; only kept for `present`.
    #[serde(default)]
    pub exit_time: Option<String>,
    /// Free text.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Scores one staff member's day into a record.
///
/// Entry and exit times are dropped unless the status is `present`.
pub fn build_record(
    engine: &ScoringEngine,
    staff: &str,
    date: NaiveDate,
    status: AttendanceStatus,
    entry_time: Option<&str>,
    exit_time: Option<&str>,
    remarks: Option<&str>,
) -> AttendanceRecord {
    let keep = |t: Option<&str>| {
        t.map(str::trim)
            .filter(|s| !s.is_empty() && status == AttendanceStatus::Present)
            .map(str::to_string)
    };
    let entry_time = keep(entry_time);
    let exit_time = keep(exit_time);

    let duty_hours =
        engine.compute_duty_hours(status, entry_time.as_deref(), exit_time.as_deref());
    let points = engine.score(
        status,
        entry_time.as_deref(),
        exit_time.as_deref(),
        duty_hours,
    );

    debug!(
        staff,
        date = %date,
        status = %status,
        duty_hours = %duty_hours,
        points,
        "Scored attendance"
    );

    AttendanceRecord {
        staff: staff.to_string(),
        date,
        status,
        entry_time,
        exit_time,
        duty_hours,
        remarks: remarks.map(str::trim).unwrap_or_default().to_string(),
        points,
    }
}

/// Validates a day's submissions and scores them into records.
///
/// Every entry is validated before any record is built, so one bad entry
/// rejects the whole submission. Entries without a status are skipped.
///
/// # Errors
///
/// - [`EngineError::RestDay`] if `date` is a rest day
/// - [`EngineError::UnknownStaff`] for a name not on the roster
/// - [`EngineError::InvalidStatus`] for an unrecognised status
pub fn build_records<R: RestDayRule + ?Sized>(
    engine: &ScoringEngine,
    roster: &RosterConfig,
    rest_days: &R,
    date: NaiveDate,
    submissions: &[DaySubmission],
) -> EngineResult<Vec<AttendanceRecord>> {
    if rest_days.is_rest_day(date) {
        warn!(date = %date, "Attendance submitted for a rest day");
        return Err(EngineError::RestDay { date });
    }

    let mut validated = Vec::with_capacity(submissions.len());
    for submission in submissions {
        if !roster.contains(&submission.staff) {
            return Err(EngineError::UnknownStaff {
                name: submission.staff.clone(),
            });
        }
        let Some(status) = submission
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        else {
            continue;
        };
        validated.push((submission, status.parse::<AttendanceStatus>()?));
    }

    Ok(validated
        .into_iter()
        .map(|(s, status)| {
            build_record(
                engine,
                &s.staff,
                date,
                status,
                s.entry_time.as_deref(),
                s.exit_time.as_deref(),
                s.remarks.as_deref(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::FixedRestDay;
    use chrono::Weekday;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn submission(staff: &str, status: Option<&str>, entry: Option<&str>, exit: Option<&str>) -> DaySubmission {
        DaySubmission {
            staff: staff.to_string(),
            status: status.map(str::to_string),
            entry_time: entry.map(str::to_string),
            exit_time: exit.map(str::to_string),
            remarks: None,
        }
    }

    fn build(date: NaiveDate, submissions: &[DaySubmission]) -> EngineResult<Vec<AttendanceRecord>> {
        build_records(
            &ScoringEngine::default(),
            &RosterConfig::default(),
            &FixedRestDay(Weekday::Sun),
            date,
            submissions,
        )
    }

    #[test]
    fn test_present_record_keeps_times_and_scores() {
        let records = build(
            monday(),
            &[submission("Chen Wei", Some("present"), Some("09:45"), Some("18:00"))],
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.status, AttendanceStatus::Present);
        assert_eq!(r.entry_time.as_deref(), Some("09:45"));
        assert_eq!(r.exit_time.as_deref(), Some("18:00"));
        assert_eq!(r.duty_hours, dec("8.25"));
        assert_eq!(r.points, 12);
    }

    #[test]
    fn test_field_work_drops_times() {
        let records = build(
            monday(),
            &[submission("Chen Wei", Some("field_work"), Some("08:00"), Some("09:00"))],
        )
        .unwrap();
        let r = &records[0];
        assert_eq!(r.entry_time, None);
        assert_eq!(r.exit_time, None);
        assert_eq!(r.duty_hours, dec("7.5"));
        assert_eq!(r.points, 10);
    }

    #[test]
    fn test_absent_record() {
        let records = build(monday(), &[submission("Chen Wei", Some("absent"), None, None)]).unwrap();
        assert_eq!(records[0].duty_hours, Decimal::ZERO);
        assert_eq!(records[0].points, -5);
    }

    #[test]
    fn test_missing_status_is_skipped() {
        let records = build(
            monday(),
            &[
                submission("Chen Wei", None, Some("09:00"), Some("17:00")),
                submission("Dana Okafor", Some("  "), None, None),
                submission("Alice Morgan", Some("absent"), None, None),
            ],
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].staff, "Alice Morgan");
    }

    #[test]
    fn test_rest_day_is_refused() {
        let result = build(sunday(), &[submission("Chen Wei", Some("present"), None, None)]);
        assert!(matches!(result, Err(EngineError::RestDay { date }) if date == sunday()));
    }

    #[test]
    fn test_unknown_staff_is_refused() {
        let result = build(monday(), &[submission("Eve", Some("present"), None, None)]);
        assert!(matches!(result, Err(EngineError::UnknownStaff { name }) if name == "Eve"));
    }

    #[test]
    fn test_bad_status_rejects_whole_submission() {
        let result = build(
            monday(),
            &[
                submission("Chen Wei", Some("present"), Some("09:00"), Some("17:00")),
                submission("Dana Okafor", Some("sick"), None, None),
            ],
        );
        assert!(matches!(result, Err(EngineError::InvalidStatus { value }) if value == "sick"));
    }

    #[test]
    fn test_malformed_time_is_kept_but_scores_zero() {
        let records = build(
            monday(),
            &[submission("Chen Wei", Some("present"), Some("nine"), Some("17:00"))],
        )
        .unwrap();
        assert_eq!(records[0].entry_time.as_deref(), Some("nine"));
        assert_eq!(records[0].duty_hours, Decimal::ZERO);
        assert_eq!(records[0].points, 0);
    }

    #[test]
    fn test_remarks_are_trimmed() {
        let record = build_record(
            &ScoringEngine::default(),
            "Chen Wei",
            monday(),
            AttendanceStatus::Absent,
            None,
            None,
            Some("  doctor's appointment "),
        );
        assert_eq!(record.remarks, "doctor's appointment");
    }
}
