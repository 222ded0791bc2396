//! Department model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An organisational unit. Names are unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Store-assigned identifier (0 until inserted).
    #[serde(default)]
    pub id: u64,
    /// Unique department name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// When the row was created.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}
