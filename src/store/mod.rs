//! Persistence layer for the employee records core.
//!
//! [`EntityStore`] is the seam between the core operations and storage.
//! Every write goes through [`EntityStore::commit`] as part of a
//! [`UnitOfWork`]: either all of its writes become visible or none do.
//!
//! # Example
//!
//! ```
//! use employee_records::models::Department;
//! use employee_records::store::{EntityStore, InMemoryStore, UnitOfWork, Write};
//! use chrono::Utc;
//!
//! let store = InMemoryStore::new();
//! let ids = store
//!     .commit(UnitOfWork::new().with(Write::InsertDepartment(Department {
//!         id: 0,
//!         name: "Finance".to_string(),
//!         description: String::new(),
//!         created_at: Utc::now(),
//!     })))
//!     .unwrap();
//! assert_eq!(store.department(ids[0]).unwrap().name, "Finance");
//! ```

mod memory;

pub use memory::InMemoryStore;

use crate::error::RecordsResult;
use crate::models::{AttendanceRecord, Department, Employee, JobTitle, PromotionHistory};

/// A single row write inside a [`UnitOfWork`].
///
/// Inserted rows with `id == 0` get the next free identifier; a non-zero id is
/// kept as given and must not already be taken.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    /// Insert a department. Names are unique.
    InsertDepartment(Department),
    /// Insert a job title. Titles are unique; the department must exist.
    InsertJobTitle(JobTitle),
    /// Insert an employee. `employee_id` and email are unique.
    InsertEmployee(Employee),
    /// Replace an employee row, provided it is still at `expected_version`.
    /// A changed `manager` must not close a cycle in the hierarchy.
    UpdateEmployee {
        /// The new row.
        employee: Employee,
        /// The version the caller read the row at.
        expected_version: u64,
    },
    /// Insert an attendance record. `(employee, date)` is unique.
    InsertAttendance(AttendanceRecord),
    /// Replace an attendance record, provided it is still at `expected_version`.
    UpdateAttendance {
        /// The new row.
        record: AttendanceRecord,
        /// The version the caller read the row at.
        expected_version: u64,
    },
    /// Append a promotion history row.
    InsertPromotion(PromotionHistory),
}

/// An ordered batch of writes committed atomically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitOfWork {
    writes: Vec<Write>,
}

impl UnitOfWork {
    /// Creates an empty unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a write.
    pub fn with(mut self, write: Write) -> Self {
        self.writes.push(write);
        self
    }

    /// Returns the writes in commit order.
    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    /// Returns the number of writes.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Returns true if the unit holds no writes.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub(crate) fn into_writes(self) -> Vec<Write> {
        self.writes
    }
}

/// Storage for departments, job titles, employees, attendance and promotion history.
pub trait EntityStore: Send + Sync {
    /// Fetches a department.
    fn department(&self, id: u64) -> RecordsResult<Department>;

    /// Fetches a job title.
    fn job_title(&self, id: u64) -> RecordsResult<JobTitle>;

    /// Fetches an employee.
    fn employee(&self, id: u64) -> RecordsResult<Employee>;

    /// Fetches an attendance record.
    fn attendance_record(&self, id: u64) -> RecordsResult<AttendanceRecord>;

    /// Job titles owned by a department, in storage order. Unknown
    /// departments have none.
    fn job_titles_in_department(&self, department: u64) -> Vec<JobTitle>;

    /// An employee's attendance, newest date first.
    fn attendance_for_employee(&self, employee: u64) -> Vec<AttendanceRecord>;

    /// An employee's promotion history, newest promotion date first.
    fn promotions_for_employee(&self, employee: u64) -> Vec<PromotionHistory>;

    /// Applies every write in `unit` or none of them.
    ///
    /// Returns the identifier of each written row, in order. A single-write
    /// unit reports the write's own error (conflict, not found, ...); a
    /// failure inside a multi-write unit is reported as
    /// [`crate::error::RecordsError::Transaction`]. A stale
    /// `expected_version` is always a transaction failure.
    ///
    /// Checks that depend on other rows, such as the manager chain, run
    /// against the store as it is at commit time.
    fn commit(&self, unit: UnitOfWork) -> RecordsResult<Vec<u64>>;

    /// Deletes a department and the job titles it owns, clearing references
    /// to either from employees and promotion history.
    fn delete_department(&self, id: u64) -> RecordsResult<()>;

    /// Deletes a job title, clearing references to it from employees and
    /// promotion history.
    fn delete_job_title(&self, id: u64) -> RecordsResult<()>;

    /// Deletes an employee with their attendance and promotion history, and
    /// clears `manager` on their direct reports.
    fn delete_employee(&self, id: u64) -> RecordsResult<()>;
}
