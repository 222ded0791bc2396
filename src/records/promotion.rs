//! The promotion transaction.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::calculation::{PromotionInput, plan_promotion};
use crate::error::RecordsResult;
use crate::models::PromotionHistory;
use crate::store::{EntityStore, UnitOfWork, Write};

use super::committed_id;

/// Promotes an employee: appends a history row snapshotting their current
/// job title, department and salary, and applies the new ones.
///
/// Both writes are committed as one unit, guarded by the employee's version
/// as read here. A concurrent change to the employee between the read and
/// the commit aborts the unit, so two promotions can never record the same
/// previous state. Nothing is retried.
///
/// # Errors
///
/// - [`RecordsError::Validation`](crate::error::RecordsError::Validation) for an empty reason,
///   invalid salary, or inactive employee.
/// - [`RecordsError::NotFound`](crate::error::RecordsError::NotFound) if the employee, job title
///   or department does not exist.
/// - [`RecordsError::Transaction`](crate::error::RecordsError::Transaction) if the commit fails;
///   neither write is visible.
pub fn promote_employee(
    store: &dyn EntityStore,
    input: &PromotionInput,
    now: DateTime<Utc>,
) -> RecordsResult<PromotionHistory> {
    input.validate()?;

    let current = store.employee(input.employee)?;
    store.job_title(input.new_job_title)?;
    store.department(input.new_department)?;

    let plan = plan_promotion(&current, input, now)?;
    let unit = UnitOfWork::new()
        .with(Write::InsertPromotion(plan.history.clone()))
        .with(Write::UpdateEmployee {
            employee: plan.employee,
            expected_version: current.version,
        });
    let ids = store.commit(unit)?;

    let history = PromotionHistory {
        id: committed_id(&ids, 0)?,
        ..plan.history
    };

    info!(
        promotion_id = history.id,
        employee = history.employee,
        employee_name = %current.full_name(),
        previous_salary = %history.previous_salary,
        new_salary = %history.new_salary,
        approved_by = history.approved_by.as_deref().unwrap_or("-"),
        "Employee promoted"
    );
    Ok(history)
}
