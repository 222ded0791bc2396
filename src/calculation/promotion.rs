//! Promotion snapshot building.
//!
//! A promotion produces two writes: a new [`PromotionHistory`] row holding the
//! employee's assignment as it was, and the employee with the new assignment
//! applied. This module builds both from the current employee without touching
//! the store; [`crate::records::promote_employee`] commits them as one unit.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RecordsError, RecordsResult};
use crate::models::{Employee, PromotionHistory};

use super::validation::{require_money, require_non_empty};

/// A proposed promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionInput {
    /// The employee to promote.
    pub employee: u64,
    /// The job title to assign.
    pub new_job_title: u64,
    /// The department to assign.
    pub new_department: u64,
    /// The salary to assign.
    pub new_salary: Decimal,
    /// Effective date of the promotion.
    pub promotion_date: NaiveDate,
    /// Why the promotion is being made.
    pub reason: String,
    /// Identity of the approving actor.
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl PromotionInput {
    /// Checks the shape of the input: a non-empty reason and a valid salary.
    ///
    /// Whether the salary changes, or whether the job title belongs to the
    /// department, is left to the caller.
    pub fn validate(&self) -> RecordsResult<()> {
        require_non_empty("reason", &self.reason)?;
        require_money("new_salary", self.new_salary)
    }
}

/// The two rows a promotion writes.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionPlan {
    /// The history row to insert.
    pub history: PromotionHistory,
    /// The employee with the new assignment applied, still carrying the
    /// version it was read at.
    pub employee: Employee,
}

/// Builds the history row and updated employee for a promotion.
///
/// Only `job_title`, `department`, `salary` and `updated_at` change on the
/// employee; status, manager and hire date are carried over untouched.
///
/// # Errors
///
/// - [`RecordsError::Validation`] if the input is malformed, names a
///   different employee than `current`, or `current` is not active.
pub fn plan_promotion(
    current: &Employee,
    input: &PromotionInput,
    now: DateTime<Utc>,
) -> RecordsResult<PromotionPlan> {
    input.validate()?;

    if current.id != input.employee {
        return Err(RecordsError::validation(
            "employee",
            format!(
                "promotion is for employee {} but employee {} was loaded",
                input.employee, current.id
            ),
        ));
    }
    if !current.is_active() {
        return Err(RecordsError::validation(
            "employee",
            format!("only active employees can be promoted, {} is not", current.employee_id),
        ));
    }

    let history = PromotionHistory {
        id: 0,
        employee: current.id,
        previous_job_title: current.job_title,
        new_job_title: Some(input.new_job_title),
        previous_department: current.department,
        new_department: Some(input.new_department),
        previous_salary: current.salary,
        new_salary: input.new_salary,
        promotion_date: input.promotion_date,
        reason: input.reason.trim().to_string(),
        approved_by: input.approved_by.clone(),
        created_at: now,
    };

    let mut employee = current.clone();
    employee.job_title = Some(input.new_job_title);
    employee.department = Some(input.new_department);
    employee.salary = input.new_salary;
    employee.updated_at = now;

    Ok(PromotionPlan { history, employee })
}
