//! Time-of-day parsing and duty-hour arithmetic.
//!
//! Times arrive as `HH:MM` text from the attendance form. Parsing never
//! fails outright: every entry point returns a [`TimeValue`] that either
//! carries the parsed value or says why a default is being used, so a
//! caller can tell "no time given" apart from "garbage given".

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The `strftime` format accepted for times of day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Why a time-derived value fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefaultReason {
    /// No time text was supplied (missing or blank).
    NotSupplied,
    /// Time text was supplied but is not a valid `HH:MM` time.
    Malformed {
        /// The text that failed to parse.
        input: String,
    },
}

/// A tagged result from a time parsing entry point.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::{parse_time, DefaultReason, TimeValue};
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_time(Some("09:45")),
///     TimeValue::Value(NaiveTime::from_hms_opt(9, 45, 0).unwrap())
/// );
/// assert_eq!(parse_time(None), TimeValue::Defaulted(DefaultReason::NotSupplied));
/// assert!(matches!(
///     parse_time(Some("quarter past nine")),
///     TimeValue::Defaulted(DefaultReason::Malformed { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue<T> {
    /// The input parsed and the value was computed.
    Value(T),
    /// The caller should use its default; the reason says why.
    Defaulted(DefaultReason),
}

impl<T> TimeValue<T> {
    /// Returns the computed value, discarding the reason if defaulted.
    pub fn value(self) -> Option<T> {
        match self {
            TimeValue::Value(v) => Some(v),
            TimeValue::Defaulted(_) => None,
        }
    }

    /// Returns a reference to the computed value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            TimeValue::Value(v) => Some(v),
            TimeValue::Defaulted(_) => None,
        }
    }

    /// Returns the default reason, if the value was not computed.
    pub fn reason(&self) -> Option<&DefaultReason> {
        match self {
            TimeValue::Value(_) => None,
            TimeValue::Defaulted(reason) => Some(reason),
        }
    }

    /// Returns `true` if the value was computed.
    pub fn is_value(&self) -> bool {
        matches!(self, TimeValue::Value(_))
    }
}

impl TimeValue<Decimal> {
    /// Returns the hours, or zero when the value was defaulted.
    pub fn value_or_zero(self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }
}

/// Parses an optional `HH:MM` time of day.
///
/// Surrounding whitespace is ignored and blank text counts as not supplied.
pub fn parse_time(input: Option<&str>) -> TimeValue<NaiveTime> {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return TimeValue::Defaulted(DefaultReason::NotSupplied);
    };

    match NaiveTime::parse_from_str(raw, TIME_FORMAT) {
        Ok(time) => TimeValue::Value(time),
        Err(e) => {
            debug!(input = raw, error = %e, "Malformed time of day");
            TimeValue::Defaulted(DefaultReason::Malformed {
                input: raw.to_string(),
            })
        }
    }
}

/// Returns the hours from `entry` to `exit`, rounded to 2 decimal places.
///
/// An exit earlier than the entry is an overnight shift ending the next day.
///
/// # Example
///
/// ```
/// use attendance_points::calculation::hours_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(hours_between(t(9, 0), t(17, 30)), Decimal::new(85, 1));
/// assert_eq!(hours_between(t(22, 0), t(6, 0)), Decimal::new(8, 0));
/// ```
pub fn hours_between(entry: NaiveTime, exit: NaiveTime) -> Decimal {
    let mut minutes = (exit - entry).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

/// Computes duty hours between two optional `HH:MM` times.
///
/// If either time is missing or malformed the result is defaulted, with
/// the entry time's reason taking precedence.
pub fn duration(entry: Option<&str>, exit: Option<&str>) -> TimeValue<Decimal> {
    let entry = match parse_time(entry) {
        TimeValue::Value(t) => t,
        TimeValue::Defaulted(reason) => return TimeValue::Defaulted(reason),
    };
    let exit = match parse_time(exit) {
        TimeValue::Value(t) => t,
        TimeValue::Defaulted(reason) => return TimeValue::Defaulted(reason),
    };
    TimeValue::Value(hours_between(entry, exit))
}

/// Serde adapter for `HH:MM` times in configuration files.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_same_day_duration() {
        let result = duration(Some("09:00"), Some("17:30"));
        assert_eq!(result, TimeValue::Value(dec("8.5")));
    }

    #[test]
    fn test_overnight_duration_wraps_to_next_day() {
        let result = duration(Some("22:00"), Some("06:00"));
        assert_eq!(result, TimeValue::Value(dec("8.0")));
    }

    #[test]
    fn test_equal_times_are_zero_hours() {
        assert_eq!(
            duration(Some("10:00"), Some("10:00")),
            TimeValue::Value(Decimal::ZERO)
        );
    }

    #[test]
    fn test_duration_rounds_to_two_places() {
        // 10 minutes = 0.1666...
        assert_eq!(
            duration(Some("09:00"), Some("09:10")).value_or_zero(),
            dec("0.17")
        );
    }

    #[test]
    fn test_missing_exit_is_not_supplied() {
        let result = duration(Some("09:00"), None);
        assert_eq!(result.reason(), Some(&DefaultReason::NotSupplied));
        assert_eq!(result.value_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_blank_entry_is_not_supplied() {
        let result = duration(Some("   "), Some("17:00"));
        assert_eq!(result, TimeValue::Defaulted(DefaultReason::NotSupplied));
    }

    #[test]
    fn test_malformed_exit_is_reported() {
        let result = duration(Some("09:00"), Some("5pm"));
        assert_eq!(
            result,
            TimeValue::Defaulted(DefaultReason::Malformed {
                input: "5pm".to_string()
            })
        );
        assert_eq!(result.value_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_entry_reason_takes_precedence() {
        let result = duration(Some("25:00"), None);
        assert_eq!(
            result.reason(),
            Some(&DefaultReason::Malformed {
                input: "25:00".to_string()
            })
        );
    }

    #[test]
    fn test_parse_time_trims_whitespace() {
        assert_eq!(parse_time(Some(" 10:30 ")), TimeValue::Value(t(10, 30)));
    }

    #[test]
    fn test_parse_time_rejects_seconds() {
        assert!(!parse_time(Some("10:30:00")).is_value());
    }

    #[test]
    fn test_hours_between_one_minute_before_midnight() {
        assert_eq!(hours_between(t(0, 0), t(23, 59)), dec("23.98"));
        assert_eq!(hours_between(t(23, 59), t(0, 0)), dec("0.02"));
    }

    proptest! {
        #[test]
        fn prop_same_day_duration_is_exact_difference(
            start in 0u32..1440,
            len in 0u32..1440,
        ) {
            prop_assume!(start + len < 1440);
            let entry = t(start / 60, start % 60);
            let exit = t((start + len) / 60, (start + len) % 60);
            let expected = (Decimal::from(len) / Decimal::from(60)).round_dp(2);
            prop_assert_eq!(hours_between(entry, exit), expected);
        }

        #[test]
        fn prop_duration_is_within_a_day(
            a in 0u32..1440,
            b in 0u32..1440,
        ) {
            let hours = hours_between(t(a / 60, a % 60), t(b / 60, b % 60));
            prop_assert!(hours >= Decimal::ZERO);
            prop_assert!(hours < Decimal::from(24));
        }

        #[test]
        fn prop_garbage_never_panics(input in "\\PC*") {
            let _ = duration(Some(&input), Some("17:00")).value_or_zero();
        }
    }
}
