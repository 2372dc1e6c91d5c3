//! Error types for the attendance points engine.
//!
//! Scoring and monthly aggregation never fail; these errors come from the
//! edges of the crate: configuration loading, input validation at the
//! submission boundary, and the attendance store.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance points engine.
///
/// # Example
///
/// ```
/// use attendance_points::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/points.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/points.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// A status outside `present`, `field_work` and `absent` was submitted.
    #[error("Invalid attendance status: '{value}'")]
    InvalidStatus {
        /// The rejected status text.
        value: String,
    },

    /// Attendance was submitted for someone who is not on the roster.
    #[error("Staff member not on roster: {name}")]
    UnknownStaff {
        /// The rejected staff name.
        name: String,
    },

    /// Attendance was submitted or requested for the weekly rest day.
    #[error("{date} is a rest day; no attendance is recorded")]
    RestDay {
        /// The rest-day date.
        date: NaiveDate,
    },

    /// A (year, month) pair does not name a calendar month.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u32,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected date text.
        value: String,
    },

    /// The attendance store failed.
    #[error("Attendance store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/points.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/points.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_status_displays_value() {
        let error = EngineError::InvalidStatus {
            value: "holiday".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid attendance status: 'holiday'");
    }

    #[test]
    fn test_rest_day_displays_date() {
        let error = EngineError::RestDay {
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "2026-03-01 is a rest day; no attendance is recorded"
        );
    }

    #[test]
    fn test_invalid_month_displays_year_and_month() {
        let error = EngineError::InvalidMonth {
            year: 2026,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid month: 2026-13");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_staff() -> EngineResult<()> {
            Err(EngineError::UnknownStaff {
                name: "Nobody".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_staff()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
