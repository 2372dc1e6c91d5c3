//! Rest-day detection and working-day enumeration.
//!
//! The same [`RestDayRule`] decides both whether attendance may be submitted
//! for a date and which days count toward a month's working-day total, so
//! the two can never disagree.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Decides which dates are non-working rest days.
pub trait RestDayRule {
    /// Returns `true` if no attendance is kept on `date`.
    fn is_rest_day(&self, date: NaiveDate) -> bool;
}

/// A single fixed weekday off each week.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::{FixedRestDay, RestDayRule};
/// use chrono::{NaiveDate, Weekday};
///
/// let rule = FixedRestDay(Weekday::Sun);
/// assert!(rule.is_rest_day(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())); // Sunday
/// assert!(!rule.is_rest_day(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())); // Monday
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRestDay(pub Weekday);

impl RestDayRule for FixedRestDay {
    fn is_rest_day(&self, date: NaiveDate) -> bool {
        date.weekday() == self.0
    }
}

impl<F> RestDayRule for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_rest_day(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// Returns the first and last dates of a month.
pub fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
    let invalid = || EngineError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;

    Ok((first, last))
}

/// Enumerates every day of the month that is not a rest day, in order.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::{working_days, FixedRestDay};
/// use chrono::Weekday;
///
/// // March 2026 has 31 days, 5 of them Sundays.
/// let days = working_days(2026, 3, &FixedRestDay(Weekday::Sun)).unwrap();
/// assert_eq!(days.len(), 26);
/// ```
pub fn working_days<R: RestDayRule + ?Sized>(
    year: i32,
    month: u32,
    rule: &R,
) -> EngineResult<Vec<NaiveDate>> {
    let (first, last) = month_bounds(year, month)?;
    Ok(first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| !rule.is_rest_day(*d))
        .collect())
}
