//! Job title model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A job title owned by a department.
///
/// Deleting the owning department deletes its job titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTitle {
    /// Store-assigned identifier (0 until inserted).
    #[serde(default)]
    pub id: u64,
    /// Unique title.
    pub title: String,
    /// The owning department.
    pub department: u64,
    /// Base salary for the title.
    #[serde(default)]
    pub base_salary: Decimal,
    /// When the row was created.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

/// The `{id, title, base_salary}` triple returned by the job-title lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTitleSummary {
    /// Job title identifier.
    pub id: u64,
    /// The title.
    pub title: String,
    /// Base salary for the title.
    pub base_salary: Decimal,
}

impl From<&JobTitle> for JobTitleSummary {
    fn from(job_title: &JobTitle) -> Self {
        Self {
            id: job_title.id,
            title: job_title.title.clone(),
            base_salary: job_title.base_salary,
        }
    }
}
