//! Report models handed to a report formatter.
//!
//! Every numeric field has a `*_display` twin that is already rounded and
//! signed, so a formatter only lays text out and never computes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceStatus, MonthlyStats};

/// One roster member's line in a daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRow {
    /// Staff member.
    pub staff: String,
    /// Recorded status, `None` when nothing was recorded.
    pub status: Option<AttendanceStatus>,
    /// Status label, e.g. "Office" or "Not Recorded".
    pub status_label: String,
    /// Entry time or "-".
    pub entry_time: String,
    /// Exit time or "-".
    pub exit_time: String,
    /// Duty hours.
    pub duty_hours: Decimal,
    /// Duty hours as "8.5h", or "-" when zero.
    pub hours_display: String,
    /// Points.
    pub points: i64,
    /// Points with explicit sign, "0" when zero.
    pub points_display: String,
    /// Remarks, truncated for the table.
    pub remarks: String,
}

/// Totals beneath the daily table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Staff recorded as present or on field work.
    pub present_count: u32,
    /// Roster size.
    pub roster_size: u32,
    /// "present/roster", e.g. "3/4".
    pub staff_present: String,
    /// Total duty hours of attended staff.
    pub total_hours: Decimal,
    /// e.g. "24.5 hours".
    pub total_hours_display: String,
    /// Total points for the day.
    pub total_points: i64,
    /// Signed total points.
    pub total_points_display: String,
    /// Average hours per attending person.
    pub average_hours: Decimal,
    /// e.g. "8.2h", "0h" when nobody attended.
    pub average_hours_display: String,
}

/// A full daily attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// The reported date.
    pub date: NaiveDate,
    /// Report heading.
    pub title: String,
    /// One row per roster member, in roster order.
    pub rows: Vec<DailyRow>,
    /// Totals for the day.
    pub summary: DailySummary,
}

/// One roster member's line in the monthly summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummaryRow {
    /// Staff member.
    pub staff: String,
    /// The computed statistics.
    pub stats: MonthlyStats,
    /// e.g. "172.5h".
    pub total_hours_display: String,
    /// e.g. "8.2h".
    pub average_hours_display: String,
    /// Signed total points.
    pub total_points_display: String,
    /// Grade label.
    pub grade_label: String,
}

/// One working day in a staff member's monthly breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// The working day.
    pub date: NaiveDate,
    /// Date as "DD-MM".
    pub date_display: String,
    /// Short status label, "-" when not recorded.
    pub status_label: String,
    /// Entry time or "-".
    pub entry_time: String,
    /// Exit time or "-".
    pub exit_time: String,
    /// Hours as "8.5", or "-" when zero.
    pub hours_display: String,
    /// Signed points.
    pub points_display: String,
    /// Remarks, truncated for the table.
    pub remarks: String,
}

/// A staff member's day-by-day records for the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffBreakdown {
    /// Staff member.
    pub staff: String,
    /// One row per working day.
    pub days: Vec<BreakdownRow>,
}

/// One line of the points legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// What earns the points.
    pub activity: String,
    /// Signed points.
    pub points_display: String,
}

/// A full monthly attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Reported year.
    pub year: i32,
    /// Reported month, 1-12.
    pub month: u32,
    /// Report heading.
    pub title: String,
    /// Working days of the month.
    pub working_days: Vec<NaiveDate>,
    /// One summary row per roster member.
    pub summary: Vec<MonthlySummaryRow>,
    /// One breakdown per roster member.
    pub breakdowns: Vec<StaffBreakdown>,
    /// The points system legend.
    pub legend: Vec<LegendEntry>,
}
