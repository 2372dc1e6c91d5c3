//! Core data models for the attendance points engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod monthly_stats;
mod report;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use monthly_stats::{MonthlyStats, PerformanceGrade};
pub use report::{
    BreakdownRow, DailyReport, DailyRow, DailySummary, LegendEntry, MonthlyReport,
    MonthlySummaryRow, StaffBreakdown,
};
