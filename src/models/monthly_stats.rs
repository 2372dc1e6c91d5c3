//! Monthly statistics and performance grade models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GradeThresholds;

/// A staff member's performance tier for a month.
///
/// # Example
///
/// ```
/// use attendance_points::config::GradeThresholds;
/// use attendance_points::models::PerformanceGrade;
///
/// let grades = GradeThresholds::default();
/// assert_eq!(PerformanceGrade::from_points(200, &grades), PerformanceGrade::Excellent);
/// assert_eq!(PerformanceGrade::from_points(199, &grades), PerformanceGrade::Good);
/// assert_eq!(PerformanceGrade::BelowAverage.to_string(), "Below Average");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceGrade {
    /// At or above the "excellent" threshold.
    Excellent,
    /// At or above the "good" threshold.
    Good,
    /// At or above the "average" threshold.
    Average,
    /// At or above the "below average" threshold.
    BelowAverage,
    /// Below every threshold.
    Poor,
    /// No attendance was recorded for the month.
    NotApplicable,
}

impl PerformanceGrade {
    /// Picks the highest tier whose lower bound `points` reaches.
    pub fn from_points(points: i64, thresholds: &GradeThresholds) -> Self {
        if points >= thresholds.excellent {
            PerformanceGrade::Excellent
        } else if points >= thresholds.good {
            PerformanceGrade::Good
        } else if points >= thresholds.average {
            PerformanceGrade::Average
        } else if points >= thresholds.below_average {
            PerformanceGrade::BelowAverage
        } else {
            PerformanceGrade::Poor
        }
    }

    /// Returns the label shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceGrade::Excellent => "Excellent",
            PerformanceGrade::Good => "Good",
            PerformanceGrade::Average => "Average",
            PerformanceGrade::BelowAverage => "Below Average",
            PerformanceGrade::Poor => "Poor",
            PerformanceGrade::NotApplicable => "Not Applicable",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One staff member's statistics for one month.
///
/// Computed on demand from stored records; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Sum of daily points plus any perfect-attendance bonus.
    pub total_points: i64,
    /// Sum of duty hours over attended days.
    pub total_hours: Decimal,
    /// Days recorded as `present` or `field_work`.
    pub present_days: u32,
    /// Days recorded as `field_work` (a subset of `present_days`).
    pub field_work_days: u32,
    /// Days recorded as `absent`.
    pub absent_days: u32,
    /// Present days whose entry time was after the late cutoff.
    pub late_arrivals: u32,
    /// Number of working days in the month.
    pub working_days: u32,
    /// `total_hours / present_days`, 2 decimal places; zero with no attended days.
    pub average_hours: Decimal,
    /// Whether every working day was attended (and the bonus applied).
    pub perfect_attendance: bool,
    /// The month's performance tier.
    pub performance_grade: PerformanceGrade,
}

impl MonthlyStats {
    /// Stats for a month with nothing recorded.
    pub fn not_applicable(working_days: u32) -> Self {
        Self {
            total_points: 0,
            total_hours: Decimal::ZERO,
            present_days: 0,
            field_work_days: 0,
            absent_days: 0,
            late_arrivals: 0,
            working_days,
            average_hours: Decimal::ZERO,
            perfect_attendance: false,
            performance_grade: PerformanceGrade::NotApplicable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_lower_bounds_are_inclusive() {
        let grades = GradeThresholds::default();
        let cases = [
            (200, PerformanceGrade::Excellent),
            (199, PerformanceGrade::Good),
            (150, PerformanceGrade::Good),
            (149, PerformanceGrade::Average),
            (100, PerformanceGrade::Average),
            (99, PerformanceGrade::BelowAverage),
            (50, PerformanceGrade::BelowAverage),
            (49, PerformanceGrade::Poor),
            (-30, PerformanceGrade::Poor),
        ];
        for (points, expected) in cases {
            assert_eq!(
                PerformanceGrade::from_points(points, &grades),
                expected,
                "points = {}",
                points
            );
        }
    }

    #[test]
    fn test_not_applicable_label() {
        assert_eq!(PerformanceGrade::NotApplicable.to_string(), "Not Applicable");
    }

    #[test]
    fn test_not_applicable_stats_are_zeroed() {
        let stats = MonthlyStats::not_applicable(26);
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.total_hours, Decimal::ZERO);
        assert_eq!(stats.working_days, 26);
        assert!(!stats.perfect_attendance);
        assert_eq!(stats.performance_grade, PerformanceGrade::NotApplicable);
    }
}
