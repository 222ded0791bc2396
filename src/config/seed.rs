//! Seed data for a fresh store.
//!
//! The seed file lists departments, job titles and employees with explicit
//! ids so that rows can reference each other. Employees are inserted in file
//! order, so a manager must be listed before their reports.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::error::RecordsResult;
use crate::models::{Department, Employee, JobTitle};
use crate::store::{EntityStore, UnitOfWork, Write};

use super::loader::load_yaml;

/// Rows to load into an empty store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedData {
    /// Departments.
    pub departments: Vec<Department>,
    /// Job titles.
    pub job_titles: Vec<JobTitle>,
    /// Employees.
    pub employees: Vec<Employee>,
}

impl SeedData {
    /// Total number of rows.
    pub fn len(&self) -> usize {
        self.departments.len() + self.job_titles.len() + self.employees.len()
    }

    /// Returns true if there is nothing to seed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads seed data from a YAML file.
pub fn load_seed<P: AsRef<Path>>(path: P) -> RecordsResult<SeedData> {
    load_yaml(path.as_ref())
}

/// Inserts all seed rows as one unit of work, stamping `created_at`/`updated_at` with `now`.
///
/// Returns the number of rows written.
pub fn seed_store(
    store: &dyn EntityStore,
    seed: SeedData,
    now: DateTime<Utc>,
) -> RecordsResult<usize> {
    let mut unit = UnitOfWork::new();
    for mut department in seed.departments {
        department.created_at = now;
        unit = unit.with(Write::InsertDepartment(department));
    }
    for mut job_title in seed.job_titles {
        job_title.created_at = now;
        unit = unit.with(Write::InsertJobTitle(job_title));
    }
    for mut employee in seed.employees {
        employee.created_at = now;
        employee.updated_at = now;
        unit = unit.with(Write::InsertEmployee(employee));
    }

    let count = unit.len();
    if count > 0 {
        store.commit(unit)?;
    }
    info!(rows = count, "Store seeded");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordsError;
    use crate::store::InMemoryStore;

    const SEED: &str = r#"
departments:
  - id: 1
    name: Engineering
  - id: 2
    name: Sales
job_titles:
  - id: 10
    title: Engineer
    department: 1
    base_salary: "70000.00"
  - id: 11
    title: Account Executive
    department: 2
    base_salary: 55000
employees:
  - id: 100
    employee_id: EMP-100
    first_name: Margaret
    last_name: Hamilton
    email: margaret@example.com
    hire_date: 2015-06-01
    salary: "90000.00"
    department: 1
    job_title: 10
  - id: 101
    employee_id: EMP-101
    first_name: Frances
    last_name: Allen
    email: frances@example.com
    hire_date: 2019-02-11
    salary: "72000.00"
    department: 1
    job_title: 10
    manager: 100
"#;

    #[test]
    fn test_seed_populates_store() {
        let seed: SeedData = serde_yaml::from_str(SEED).unwrap();
        assert_eq!(seed.len(), 6);

        let store = InMemoryStore::new();
        let now = Utc::now();
        assert_eq!(seed_store(&store, seed, now).unwrap(), 6);

        assert_eq!(store.job_titles_in_department(1).len(), 1);
        let frances = store.employee(101).unwrap();
        assert_eq!(frances.manager, Some(100));
        assert_eq!(frances.created_at, now);
    }

    #[test]
    fn test_seed_is_all_or_nothing() {
        let mut seed: SeedData = serde_yaml::from_str(SEED).unwrap();
        seed.employees[1].manager = Some(999);

        let store = InMemoryStore::new();
        let err = seed_store(&store, seed, Utc::now()).unwrap_err();

        assert!(matches!(err, RecordsError::Transaction { .. }));
        assert!(store.department(1).is_err());
    }

    #[test]
    fn test_empty_seed_writes_nothing() {
        let store = InMemoryStore::new();
        assert_eq!(seed_store(&store, SeedData::default(), Utc::now()).unwrap(), 0);
    }
}
