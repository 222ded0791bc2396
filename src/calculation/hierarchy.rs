//! Manager hierarchy checks.
//!
//! Manager links must form a forest. Before an assignment is written, the
//! proposed manager's chain is walked upward; reaching the employee again
//! means the assignment would close a cycle.

use std::collections::HashSet;

use crate::error::{RecordsError, RecordsResult};

/// Checks that making `manager` the manager of `employee` keeps the hierarchy acyclic.
///
/// `manager_of` returns the current manager of an employee. The walk stops at
/// the first employee without a manager. A chain that loops without passing
/// `employee` (data written before this check existed) is also rejected.
///
/// # Examples
///
/// ```
/// use employee_records::calculation::check_manager_assignment;
/// use employee_records::error::RecordsResult;
/// use std::collections::HashMap;
///
/// // 3 reports to 2, 2 reports to 1.
/// let managers: HashMap<u64, Option<u64>> = [(1, None), (2, Some(1)), (3, Some(2))].into();
/// let lookup = |id: u64| -> RecordsResult<Option<u64>> { Ok(managers[&id]) };
///
/// assert!(check_manager_assignment(3, 1, lookup).is_ok());
/// assert!(check_manager_assignment(1, 3, lookup).is_err());
/// ```
pub fn check_manager_assignment<F>(employee: u64, manager: u64, mut manager_of: F) -> RecordsResult<()>
where
    F: FnMut(u64) -> RecordsResult<Option<u64>>,
{
    if employee == manager {
        return Err(RecordsError::validation(
            "manager",
            "an employee cannot manage themselves",
        ));
    }

    let mut seen = HashSet::new();
    let mut current = Some(manager);
    while let Some(id) = current {
        if id == employee {
            return Err(RecordsError::validation(
                "manager",
                format!(
                    "assigning manager {} to employee {} would create a cycle",
                    manager, employee
                ),
            ));
        }
        if !seen.insert(id) {
            return Err(RecordsError::validation(
                "manager",
                format!("manager chain above employee {} already contains a cycle", manager),
            ));
        }
        current = manager_of(id)?;
    }

    Ok(())
}
