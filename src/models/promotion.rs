//! Promotion history model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An append-only audit row recording one promotion.
///
/// The `previous_*` fields snapshot the employee's assignment immediately
/// before the promotion; the `new_*` fields are what it became. Job title and
/// department links are cleared (not deleted) when their referent is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionHistory {
    /// Store-assigned identifier (0 until inserted).
    #[serde(default)]
    pub id: u64,
    /// The promoted employee.
    pub employee: u64,
    /// Job title held before the promotion.
    pub previous_job_title: Option<u64>,
    /// Job title assigned by the promotion.
    pub new_job_title: Option<u64>,
    /// Department before the promotion.
    pub previous_department: Option<u64>,
    /// Department assigned by the promotion.
    pub new_department: Option<u64>,
    /// Salary before the promotion.
    pub previous_salary: Decimal,
    /// Salary assigned by the promotion.
    pub new_salary: Decimal,
    /// Effective date of the promotion.
    pub promotion_date: NaiveDate,
    /// Why the promotion was made.
    pub reason: String,
    /// Identity of the approving actor.
    pub approved_by: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
