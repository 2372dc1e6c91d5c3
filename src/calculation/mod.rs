//! Calculation logic for the attendance points engine.
//!
//! This module contains time-of-day arithmetic, daily points scoring,
//! rest-day and working-day rules, validation of submitted attendance, and
//! the monthly aggregation that produces totals, bonuses and grades.

pub(crate) mod time_math;

mod monthly;
mod scoring;
mod submission;
mod working_days;

pub use monthly::MonthlyAggregator;
pub use scoring::{PointsBreakdown, ScoringEngine};
pub use submission::{DaySubmission, build_record, build_records};
pub use time_math::{DefaultReason, TIME_FORMAT, TimeValue, duration, hours_between, parse_time};
pub use working_days::{FixedRestDay, RestDayRule, month_bounds, working_days};
