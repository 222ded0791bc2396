//! Configuration types.
//!
//! Every section and field has a default, so an empty file is a valid
//! configuration.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{AttendanceRules, DEFAULT_DAILY_OVERTIME_THRESHOLD, OvertimePolicy};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Attendance computation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Hours in a day before overtime starts.
    pub daily_overtime_threshold_hours: Decimal,
    /// Whether stored overtime survives a shorter recomputation.
    pub overtime_policy: OvertimePolicy,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            daily_overtime_threshold_hours: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            overtime_policy: OvertimePolicy::default(),
        }
    }
}

impl AttendanceConfig {
    /// Returns the rules used by the attendance computation.
    pub fn rules(&self) -> AttendanceRules {
        AttendanceRules {
            daily_overtime_threshold: self.daily_overtime_threshold_hours,
            overtime_policy: self.overtime_policy,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Attendance computation settings.
    pub attendance: AttendanceConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Optional seed data file, relative to the working directory.
    pub seed_path: Option<PathBuf>,
}
