//! Configuration types for attendance scoring.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::time_math::hhmm;

/// The single tunable table of point values and scoring thresholds.
///
/// # Example
///
/// ```
/// use attendance_points::config::PointsTable;
/// use rust_decimal::Decimal;
///
/// let table = PointsTable::default();
/// assert_eq!(table.full_day_points, 10);
/// assert_eq!(table.full_day_threshold, Decimal::new(75, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    /// Points for a present day at or above the full-day threshold.
    pub full_day_points: i64,
    /// Points for a present day at or above the half-day threshold.
    pub half_day_points: i64,
    /// Points for arriving at or before the early cutoff.
    pub early_arrival_points: i64,
    /// Points for arriving after the late cutoff (normally negative).
    pub late_arrival_points: i64,
    /// Points per whole hour worked beyond the full-day threshold.
    pub overtime_points_per_hour: i64,
    /// Points for an absent day (normally negative).
    pub absent_penalty: i64,
    /// Weekly punctuality bonus. Reserved: no rule applies it yet.
    pub punctuality_bonus: i64,
    /// Monthly bonus when every working day was attended.
    pub perfect_attendance_bonus: i64,
    /// Points for a field or warehouse day.
    pub field_work_bonus: i64,
    /// Duty hours needed for a full day.
    pub full_day_threshold: Decimal,
    /// Duty hours needed for a half day.
    pub half_day_threshold: Decimal,
    /// Duty hours credited for a field or warehouse day.
    pub field_work_hours: Decimal,
    /// Arrivals at or before this time earn the early arrival points.
    #[serde(with = "hhmm")]
    pub early_cutoff: NaiveTime,
    /// Arrivals after this time earn the late arrival points.
    #[serde(with = "hhmm")]
    pub late_cutoff: NaiveTime,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            full_day_points: 10,
            half_day_points: 5,
            early_arrival_points: 2,
            late_arrival_points: -1,
            overtime_points_per_hour: 1,
            absent_penalty: -5,
            punctuality_bonus: 5,
            perfect_attendance_bonus: 20,
            field_work_bonus: 10,
            full_day_threshold: Decimal::new(75, 1),
            half_day_threshold: Decimal::new(4, 0),
            field_work_hours: Decimal::new(75, 1),
            early_cutoff: NaiveTime::from_hms_opt(10, 0, 0).expect("Valid cutoff time"),
            late_cutoff: NaiveTime::from_hms_opt(10, 30, 0).expect("Valid cutoff time"),
        }
    }
}

/// Lower bounds (inclusive) of each monthly performance grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeThresholds {
    /// Minimum points for "Excellent".
    pub excellent: i64,
    /// Minimum points for "Good".
    pub good: i64,
    /// Minimum points for "Average".
    pub average: i64,
    /// Minimum points for "Below Average". Anything lower is "Poor".
    pub below_average: i64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: 200,
            good: 150,
            average: 100,
            below_average: 50,
        }
    }
}

/// Switches for the monthly fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPolicy {
    /// Whether absent days' penalty points count toward the monthly total.
    pub count_absence_penalty: bool,
}

impl Default for MonthlyPolicy {
    fn default() -> Self {
        Self {
            count_absence_penalty: true,
        }
    }
}

/// Structure of `points.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Daily point values and thresholds.
    pub points: PointsTable,
    /// Monthly grade boundaries.
    #[serde(default)]
    pub grades: GradeThresholds,
    /// Monthly aggregation switches.
    #[serde(default)]
    pub monthly: MonthlyPolicy,
}

/// Structure of `roster.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Staff names, in the order reports list them.
    pub staff: Vec<String>,
    /// The fixed weekly day off.
    #[serde(default = "default_rest_day")]
    pub rest_day: Weekday,
}

fn default_rest_day() -> Weekday {
    Weekday::Sun
}

impl RosterConfig {
    /// Returns `true` if `name` is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.staff.iter().any(|s| s == name)
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            staff: vec![
                "Alice Morgan".to_string(),
                "Bilal Ahmed".to_string(),
                "Chen Wei".to_string(),
                "Dana Okafor".to_string(),
            ],
            rest_day: default_rest_day(),
        }
    }
}

/// The complete configuration loaded from a config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceConfig {
    roster: RosterConfig,
    scoring: ScoringConfig,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(roster: RosterConfig, scoring: ScoringConfig) -> Self {
        Self { roster, scoring }
    }

    /// Returns the roster.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    /// Returns the full scoring configuration.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Returns the points table.
    pub fn points(&self) -> &PointsTable {
        &self.scoring.points
    }

    /// Returns the grade thresholds.
    pub fn grades(&self) -> GradeThresholds {
        self.scoring.grades
    }

    /// Returns the monthly aggregation policy.
    pub fn monthly(&self) -> MonthlyPolicy {
        self.scoring.monthly
    }
}
