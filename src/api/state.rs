//! Application state for the employee records API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::AttendanceRules;
use crate::config::ConfigLoader;
use crate::store::EntityStore;

/// Shared application state.
///
/// Holds the entity store and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EntityStore>,
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn EntityStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the entity store.
    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the attendance rules from the configuration.
    pub fn attendance_rules(&self) -> AttendanceRules {
        self.config.attendance_rules()
    }
}
