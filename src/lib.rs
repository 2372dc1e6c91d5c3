//! Attendance Points Engine
//!
//! This crate scores a staff member's daily attendance into duty hours and
//! points, folds a month of records into performance statistics, and builds
//! daily and monthly attendance reports. An HTTP API in [`api`] records
//! submissions and serves the reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod store;
