//! Configuration loading and management for the attendance points engine.
//!
//! This module loads the staff roster and the points table from YAML files.
//! Everything the scoring rules depend on lives here so it can be varied per
//! deployment (or per test) rather than baked into the engine.
//!
//! # Example
//!
//! ```no_run
//! use attendance_points::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Full day is worth {} points", loader.config().points().full_day_points);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, GradeThresholds, MonthlyPolicy, PointsTable, RosterConfig, ScoringConfig,
};
