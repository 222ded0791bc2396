//! Manager assignment.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::calculation::check_manager_assignment;
use crate::error::RecordsResult;
use crate::models::Employee;
use crate::store::{EntityStore, UnitOfWork, Write};

/// Sets or clears an employee's manager.
///
/// The proposed manager's chain is walked first and the assignment is
/// rejected if it would make the hierarchy cyclic. The store repeats the walk
/// at commit time, so a concurrent assignment that closes the loop after the
/// first walk is still rejected.
///
/// # Errors
///
/// - [`RecordsError::NotFound`](crate::error::RecordsError::NotFound) if either employee does not exist.
/// - [`RecordsError::Validation`](crate::error::RecordsError::Validation) if the assignment would
///   create a cycle.
/// - [`RecordsError::Transaction`](crate::error::RecordsError::Transaction) if the employee changed
///   concurrently.
pub fn assign_manager(
    store: &dyn EntityStore,
    employee_id: u64,
    manager: Option<u64>,
    now: DateTime<Utc>,
) -> RecordsResult<Employee> {
    let current = store.employee(employee_id)?;

    if let Some(manager_id) = manager {
        check_manager_assignment(employee_id, manager_id, |id| {
            store.employee(id).map(|e| e.manager)
        })?;
    }

    let mut employee = current.clone();
    employee.manager = manager;
    employee.updated_at = now;
    store.commit(UnitOfWork::new().with(Write::UpdateEmployee {
        employee,
        expected_version: current.version,
    }))?;

    info!(employee = employee_id, manager = ?manager, "Manager assigned");
    store.employee(employee_id)
}
