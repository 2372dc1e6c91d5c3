//! Display strings for report cells.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AttendanceStatus;

/// Points with an explicit sign; zero is plain "0".
pub fn signed(points: i64) -> String {
    if points == 0 {
        "0".to_string()
    } else {
        format!("{:+}", points)
    }
}

/// Hours to one decimal place, e.g. "8.3".
pub fn one_place(hours: Decimal) -> String {
    let rounded = hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}

/// Hours cell: one decimal place plus `suffix`, or "-" when zero.
pub fn hours_cell(hours: Decimal, suffix: &str) -> String {
    if hours > Decimal::ZERO {
        format!("{}{}", one_place(hours), suffix)
    } else {
        "-".to_string()
    }
}

/// Cuts `text` to `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Status label for the daily table.
pub fn daily_status_label(status: Option<AttendanceStatus>) -> &'static str {
    match status {
        Some(AttendanceStatus::Present) => "Office",
        Some(AttendanceStatus::FieldWork) => "Field/Warehouse",
        Some(AttendanceStatus::Absent) => "Absent",
        None => "Not Recorded",
    }
}

/// Shorter status label for the monthly breakdown.
pub fn breakdown_status_label(status: Option<AttendanceStatus>) -> &'static str {
    match status {
        Some(AttendanceStatus::Present) => "Office",
        Some(AttendanceStatus::FieldWork) => "Field",
        Some(AttendanceStatus::Absent) => "Absent",
        None => "-",
    }
}
