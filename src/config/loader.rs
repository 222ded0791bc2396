//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::calculation::AttendanceRules;
use crate::error::{RecordsError, RecordsResult};

use super::types::RecordsConfig;

/// Loads and provides access to the service configuration.
///
/// # File format
///
/// ```text
/// server:
///   bind_address: "0.0.0.0:8000"
/// attendance:
///   daily_overtime_threshold_hours: "8"
///   overtime_policy: sticky      # or: recompute
/// logging:
///   level: info
///   json: false
/// seed_path: config/seed.yaml
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RecordsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`RecordsConfig`] (`ConfigParseError`)
    /// - The overtime threshold is negative (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RecordsResult<Self> {
        let path = path.as_ref();
        let config = load_yaml::<RecordsConfig>(path)?;

        if config.attendance.daily_overtime_threshold_hours.is_sign_negative() {
            return Err(RecordsError::ConfigParseError {
                path: path.display().to_string(),
                message: "attendance.daily_overtime_threshold_hours must not be negative"
                    .to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: RecordsConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RecordsConfig {
        &self.config
    }

    /// Returns the attendance computation rules.
    pub fn attendance_rules(&self) -> AttendanceRules {
        self.config.attendance.rules()
    }
}

/// Loads and parses a YAML file.
pub(super) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RecordsResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| RecordsError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| RecordsError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
