//! Daily duty-hour and points scoring.
//!
//! This module turns one staff member's raw attendance for one day into
//! duty hours and a signed points value, using the configured
//! [`PointsTable`].

use chrono::NaiveTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::PointsTable;
use crate::models::AttendanceStatus;

use super::time_math::{self, TimeValue};

/// The individual contributions that make up a day's points.
///
/// `total()` is what [`ScoringEngine::score`] returns. For `absent` and
/// `field_work` only `status_points` is non-zero; for `present` it is zero
/// and the other three are summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Fixed points for `absent` or `field_work`.
    pub status_points: i64,
    /// Full-day or half-day attendance points.
    pub base_points: i64,
    /// Early or late arrival adjustment.
    pub timing_points: i64,
    /// Points for whole overtime hours.
    pub overtime_points: i64,
}

impl PointsBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> i64 {
        self.status_points + self.base_points + self.timing_points + self.overtime_points
    }
}

/// Scores attendance against a points table.
///
/// The engine holds no state beyond its configuration; every method is a
/// pure function of its arguments.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::ScoringEngine;
/// use attendance_points::config::PointsTable;
/// use attendance_points::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// let engine = ScoringEngine::new(PointsTable::default());
/// let hours = engine.compute_duty_hours(AttendanceStatus::Present, Some("09:45"), Some("18:00"));
/// assert_eq!(hours, Decimal::new(825, 2));
///
/// // full day (10) + early arrival (2) + no whole overtime hour
/// let points = engine.score(AttendanceStatus::Present, Some("09:45"), Some("18:00"), hours);
/// assert_eq!(points, 12);
/// ```
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    points: PointsTable,
}

impl ScoringEngine {
    /// Creates an engine for the given points table.
    pub fn new(points: PointsTable) -> Self {
        Self { points }
    }

    /// Returns the points table in use.
    pub fn points(&self) -> &PointsTable {
        &self.points
    }

    /// Computes the duty hours credited for a day.
    ///
    /// - `present`: time between entry and exit (zero if either is missing
    ///   or malformed)
    /// - `field_work`: the configured field-work hours
    /// - `absent`: zero
    pub fn compute_duty_hours(
        &self,
        status: AttendanceStatus,
        entry_time: Option<&str>,
        exit_time: Option<&str>,
    ) -> Decimal {
        match status {
            AttendanceStatus::Present => time_math::duration(entry_time, exit_time).value_or_zero(),
            AttendanceStatus::FieldWork => self.points.field_work_hours,
            AttendanceStatus::Absent => Decimal::ZERO,
        }
    }

    /// Computes the points for a day.
    ///
    /// The exit time only matters through `duty_hours`; it is accepted so
    /// callers can pass a day's facts straight through.
    pub fn score(
        &self,
        status: AttendanceStatus,
        entry_time: Option<&str>,
        exit_time: Option<&str>,
        duty_hours: Decimal,
    ) -> i64 {
        self.breakdown(status, entry_time, exit_time, duty_hours)
            .total()
    }

    /// Computes the individual point contributions for a day.
    pub fn breakdown(
        &self,
        status: AttendanceStatus,
        entry_time: Option<&str>,
        _exit_time: Option<&str>,
        duty_hours: Decimal,
    ) -> PointsBreakdown {
        match status {
            AttendanceStatus::Absent => PointsBreakdown {
                status_points: self.points.absent_penalty,
                ..Default::default()
            },
            AttendanceStatus::FieldWork => PointsBreakdown {
                status_points: self.points.field_work_bonus,
                ..Default::default()
            },
            AttendanceStatus::Present => PointsBreakdown {
                status_points: 0,
                base_points: self.base_points(duty_hours),
                timing_points: self.timing_points(entry_time),
                overtime_points: self.overtime_points(duty_hours),
            },
        }
    }

    /// Full-day or half-day points for the hours worked.
    fn base_points(&self, duty_hours: Decimal) -> i64 {
        if duty_hours >= self.points.full_day_threshold {
            self.points.full_day_points
        } else if duty_hours >= self.points.half_day_threshold {
            self.points.half_day_points
        } else {
            0
        }
    }

    /// Early/late arrival adjustment from the entry time alone.
    ///
    /// A missing or malformed entry time earns nothing either way.
    pub fn timing_points(&self, entry_time: Option<&str>) -> i64 {
        match time_math::parse_time(entry_time) {
            TimeValue::Value(entry) if entry <= self.points.early_cutoff => {
                self.points.early_arrival_points
            }
            TimeValue::Value(entry) if self.arrived_late(entry) => self.points.late_arrival_points,
            _ => 0,
        }
    }

    /// Returns `true` if the entry time parses and is after the late cutoff.
    pub fn is_late(&self, entry_time: Option<&str>) -> bool {
        time_math::parse_time(entry_time)
            .value()
            .is_some_and(|entry| self.arrived_late(entry))
    }

    fn arrived_late(&self, entry: NaiveTime) -> bool {
        entry > self.points.late_cutoff
    }

    /// Points for each completed hour beyond the full-day threshold.
    fn overtime_points(&self, duty_hours: Decimal) -> i64 {
        if duty_hours <= self.points.full_day_threshold {
            return 0;
        }
        let whole_hours = (duty_hours - self.points.full_day_threshold)
            .floor()
            .to_i64()
            .unwrap_or(0);
        whole_hours * self.points.overtime_points_per_hour
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(PointsTable::default())
    }
}
