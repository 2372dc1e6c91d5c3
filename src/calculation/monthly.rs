//! Monthly aggregation of daily attendance records.
//!
//! Rolls one staff member's records for a month into [`MonthlyStats`]:
//! totals, average hours, the perfect-attendance bonus and a grade.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{AttendanceConfig, GradeThresholds, MonthlyPolicy, PointsTable};
use crate::models::{AttendanceRecord, AttendanceStatus, MonthlyStats, PerformanceGrade};

use super::scoring::ScoringEngine;

/// Folds a month of attendance records into statistics.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::{working_days, FixedRestDay, MonthlyAggregator};
/// use attendance_points::config::AttendanceConfig;
/// use attendance_points::models::PerformanceGrade;
/// use chrono::Weekday;
///
/// let aggregator = MonthlyAggregator::from_config(&AttendanceConfig::default());
/// let days = working_days(2026, 3, &FixedRestDay(Weekday::Sun)).unwrap();
///
/// let stats = aggregator.aggregate(&[], &days);
/// assert_eq!(stats.performance_grade, PerformanceGrade::NotApplicable);
/// ```
#[derive(Debug, Clone)]
pub struct MonthlyAggregator {
    engine: ScoringEngine,
    grades: GradeThresholds,
    policy: MonthlyPolicy,
}

impl MonthlyAggregator {
    /// Creates an aggregator from its parts.
    pub fn new(points: PointsTable, grades: GradeThresholds, policy: MonthlyPolicy) -> Self {
        Self {
            engine: ScoringEngine::new(points),
            grades,
            policy,
        }
    }

    /// Creates an aggregator from a loaded configuration.
    pub fn from_config(config: &AttendanceConfig) -> Self {
        Self::new(config.points().clone(), config.grades(), config.monthly())
    }

    /// Computes one staff member's statistics for a month.
    ///
    /// Only records dated on one of `working_days` are folded. Attended
    /// days add their points and hours; absent days add their penalty when
    /// the policy counts absences, and never add hours. A perfect month
    /// earns the bonus once. With nothing folded the grade is
    /// [`PerformanceGrade::NotApplicable`].
    pub fn aggregate<'a, I>(&self, records: I, working_days: &[NaiveDate]) -> MonthlyStats
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let days: HashSet<NaiveDate> = working_days.iter().copied().collect();
        let working_day_count = working_days.len() as u32;
        let points = self.engine.points();

        let mut stats = MonthlyStats::not_applicable(working_day_count);
        let mut folded = 0u32;
        let mut attended: HashSet<NaiveDate> = HashSet::new();

        for record in records.into_iter().filter(|r| days.contains(&r.date)) {
            folded += 1;
            match record.status {
                AttendanceStatus::Absent => {
                    stats.absent_days += 1;
                    if self.policy.count_absence_penalty {
                        stats.total_points += record.points;
                    }
                }
                AttendanceStatus::Present | AttendanceStatus::FieldWork => {
                    stats.total_points += record.points;
                    stats.total_hours += record.duty_hours;
                    if attended.insert(record.date) {
                        stats.present_days += 1;
                    }
                    if record.status == AttendanceStatus::FieldWork {
                        stats.field_work_days += 1;
                    } else if self.engine.is_late(record.entry_time.as_deref()) {
                        stats.late_arrivals += 1;
                    }
                }
            }
        }

        if folded == 0 {
            return stats;
        }

        if working_day_count > 0 && attended.len() == days.len() {
            stats.perfect_attendance = true;
            stats.total_points += points.perfect_attendance_bonus;
        }

        if stats.present_days > 0 {
            stats.average_hours =
                (stats.total_hours / Decimal::from(stats.present_days)).round_dp(2);
        }

        stats.performance_grade = PerformanceGrade::from_points(stats.total_points, &self.grades);

        debug!(
            folded,
            total_points = stats.total_points,
            present_days = stats.present_days,
            perfect = stats.perfect_attendance,
            "Aggregated monthly attendance"
        );

        stats
    }

    /// Computes statistics for every roster member, in roster order.
    ///
    /// `records` may hold any dates and staff; each member gets an entry
    /// even when none of their records fall on a working day.
    pub fn aggregate_roster(
        &self,
        roster: &[String],
        records: &BTreeMap<(String, NaiveDate), AttendanceRecord>,
        working_days: &[NaiveDate],
    ) -> Vec<(String, MonthlyStats)> {
        roster
            .iter()
            .map(|staff| {
                let own = records
                    .iter()
                    .filter(|((name, _), _)| name == staff)
                    .map(|(_, record)| record);
                (staff.clone(), self.aggregate(own, working_days))
            })
            .collect()
    }
}
