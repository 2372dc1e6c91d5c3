//! Report building and rendering.
//!
//! [`build_daily_report`] and [`build_monthly_report`] turn stored records
//! into report models with every cell already formatted. A
//! [`ReportFormatter`] then lays those models out as a document.

mod builder;
mod display;
mod text;

pub use builder::{build_daily_report, build_monthly_report, legend};
pub use text::{ReportFormatter, TextFormatter};
