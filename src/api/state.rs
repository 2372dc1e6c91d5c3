//! Application state for the attendance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{FixedRestDay, ScoringEngine};
use crate::config::{AttendanceConfig, ConfigLoader};
use crate::store::{AttendanceStore, MemoryStore};

/// Shared application state.
///
/// Holds the validated configuration, a scoring engine built from it, and
/// the attendance store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AttendanceConfig>,
    engine: Arc<ScoringEngine>,
    store: Arc<dyn AttendanceStore>,
}

impl AppState {
    /// Creates application state backed by an empty [`MemoryStore`].
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Creates application state over an existing store.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn AttendanceStore>) -> Self {
        let config = config.into_config();
        let engine = ScoringEngine::new(config.points().clone());
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            store,
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the scoring engine.
    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Returns the attendance store.
    pub fn store(&self) -> &dyn AttendanceStore {
        self.store.as_ref()
    }

    /// Returns the roster's rest-day rule.
    pub fn rest_days(&self) -> FixedRestDay {
        FixedRestDay(self.config.roster().rest_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(ConfigLoader::load("./config/default").unwrap());
        let other = state.clone();
        assert!(Arc::ptr_eq(&state.store, &other.store));
        assert_eq!(state.rest_days(), FixedRestDay(Weekday::Sun));
    }
}
