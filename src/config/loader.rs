//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! and points table from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceConfig, RosterConfig, ScoringConfig};

/// Loads and validates attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── roster.yaml   # Staff list and weekly rest day
/// └── points.yaml   # Points table, grade thresholds, monthly policy
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_points::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Tracking {} staff", loader.config().roster().staff.len());
/// # Ok::<(), attendance_points::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds values that fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;
        let scoring = Self::load_yaml::<ScoringConfig>(&path.join("points.yaml"))?;

        let config = AttendanceConfig::new(roster, scoring);
        Self::validate(&config)?;

        info!(
            path = %path.display(),
            staff = config.roster().staff.len(),
            rest_day = %config.roster().rest_day,
            "Loaded attendance configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: AttendanceConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &AttendanceConfig) -> EngineResult<()> {
        let invalid = |message: String| -> EngineResult<()> {
            Err(EngineError::InvalidConfig { message })
        };

        let staff = &config.roster().staff;
        if staff.is_empty() {
            return invalid("roster must list at least one staff member".to_string());
        }
        let mut seen = HashSet::new();
        for name in staff {
            if name.trim().is_empty() {
                return invalid("staff names must not be blank".to_string());
            }
            if !seen.insert(name.as_str()) {
                return invalid(format!("duplicate staff member '{}'", name));
            }
        }

        let points = config.points();
        if points.half_day_threshold > points.full_day_threshold {
            return invalid(format!(
                "half_day_threshold ({}) exceeds full_day_threshold ({})",
                points.half_day_threshold, points.full_day_threshold
            ));
        }
        if points.half_day_threshold.is_sign_negative() || points.field_work_hours.is_sign_negative()
        {
            return invalid("hour thresholds must not be negative".to_string());
        }
        if points.early_cutoff > points.late_cutoff {
            return invalid(format!(
                "early_cutoff ({}) is after late_cutoff ({})",
                points.early_cutoff.format("%H:%M"),
                points.late_cutoff.format("%H:%M")
            ));
        }

        let grades = config.grades();
        if !(grades.excellent >= grades.good
            && grades.good >= grades.average
            && grades.average >= grades.below_average)
        {
            return invalid("grade thresholds must be in descending order".to_string());
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AttendanceConfig {
        self.config
    }
}
