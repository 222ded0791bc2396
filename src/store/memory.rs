//! In-memory implementation of [`EntityStore`].
//!
//! All tables live behind one `parking_lot::RwLock`. A commit applies its
//! writes in place while holding the write lock and keeps one undo entry per
//! applied write. If a later write fails, the entries are replayed in reverse
//! before the lock is released, so readers never see a partly applied unit
//! and concurrent units serialize.

use std::collections::{BTreeMap, HashSet};

use parking_lot::RwLock;
use tracing::debug;

use crate::calculation::check_manager_assignment;
use crate::error::{RecordsError, RecordsResult};
use crate::models::{AttendanceRecord, Department, Employee, JobTitle, PromotionHistory};

use super::{EntityStore, UnitOfWork, Write};

/// Rows of one kind plus the next identifier to hand out.
#[derive(Debug)]
struct Table<T> {
    entity: &'static str,
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

/// What one applied write replaced in a [`Table`].
#[derive(Debug)]
struct Revert<T> {
    id: u64,
    previous: Option<T>,
    next_id: u64,
}

impl<T> Table<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: u64) -> RecordsResult<&T> {
        self.rows.get(&id).ok_or(RecordsError::NotFound {
            entity: self.entity,
            id,
        })
    }

    fn require(&self, id: Option<u64>) -> RecordsResult<()> {
        match id {
            Some(id) => self.get(id).map(|_| ()),
            None => Ok(()),
        }
    }

    fn allocate(&mut self, requested: u64) -> RecordsResult<u64> {
        let id = if requested == 0 { self.next_id } else { requested };
        if self.rows.contains_key(&id) {
            return Err(RecordsError::Conflict {
                message: format!("{} {} already exists", self.entity, id),
            });
        }
        let following = id.checked_add(1).ok_or_else(|| {
            RecordsError::validation("id", format!("{} id {} is out of range", self.entity, id))
        })?;
        self.next_id = self.next_id.max(following);
        Ok(id)
    }

    /// Stores `row` under `id`. `next_id` is the counter as it was before the write.
    fn put(&mut self, id: u64, row: T, next_id: u64) -> Revert<T> {
        let previous = self.rows.insert(id, row);
        Revert {
            id,
            previous,
            next_id,
        }
    }

    fn revert(&mut self, revert: Revert<T>) {
        match revert.previous {
            Some(row) => {
                self.rows.insert(revert.id, row);
            }
            None => {
                self.rows.remove(&revert.id);
            }
        }
        self.next_id = revert.next_id;
    }
}

/// Undo entry for one applied write.
#[derive(Debug)]
enum Undo {
    Department(Revert<Department>),
    JobTitle(Revert<JobTitle>),
    Employee(Revert<Employee>),
    Attendance(Revert<AttendanceRecord>),
    Promotion(Revert<PromotionHistory>),
}

#[derive(Debug)]
struct Tables {
    departments: Table<Department>,
    job_titles: Table<JobTitle>,
    employees: Table<Employee>,
    attendance: Table<AttendanceRecord>,
    promotions: Table<PromotionHistory>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            departments: Table::new("department"),
            job_titles: Table::new("job title"),
            employees: Table::new("employee"),
            attendance: Table::new("attendance record"),
            promotions: Table::new("promotion"),
        }
    }
}

impl Tables {
    /// Applies one write. A failed write leaves the tables untouched.
    fn apply(&mut self, write: Write) -> RecordsResult<(u64, Undo)> {
        match write {
            Write::InsertDepartment(mut department) => {
                if self
                    .departments
                    .rows
                    .values()
                    .any(|d| d.name == department.name)
                {
                    return Err(RecordsError::Conflict {
                        message: format!("department '{}' already exists", department.name),
                    });
                }
                let next_id = self.departments.next_id;
                department.id = self.departments.allocate(department.id)?;
                let id = department.id;
                let revert = self.departments.put(id, department, next_id);
                Ok((id, Undo::Department(revert)))
            }
            Write::InsertJobTitle(mut job_title) => {
                self.departments.get(job_title.department)?;
                if self
                    .job_titles
                    .rows
                    .values()
                    .any(|j| j.title == job_title.title)
                {
                    return Err(RecordsError::Conflict {
                        message: format!("job title '{}' already exists", job_title.title),
                    });
                }
                let next_id = self.job_titles.next_id;
                job_title.id = self.job_titles.allocate(job_title.id)?;
                let id = job_title.id;
                let revert = self.job_titles.put(id, job_title, next_id);
                Ok((id, Undo::JobTitle(revert)))
            }
            Write::InsertEmployee(mut employee) => {
                self.check_employee_references(&employee)?;
                self.check_employee_unique(&employee, None)?;
                let next_id = self.employees.next_id;
                employee.id = self.employees.allocate(employee.id)?;
                employee.version = 0;
                let id = employee.id;
                let revert = self.employees.put(id, employee, next_id);
                Ok((id, Undo::Employee(revert)))
            }
            Write::UpdateEmployee {
                mut employee,
                expected_version,
            } => {
                let stored = self.employees.get(employee.id)?;
                if stored.version != expected_version {
                    return Err(RecordsError::Transaction {
                        message: format!(
                            "employee {} was modified concurrently (expected version {}, found {})",
                            employee.id, expected_version, stored.version
                        ),
                    });
                }
                let manager_changed = stored.manager != employee.manager;
                self.check_employee_references(&employee)?;
                if let (true, Some(manager)) = (manager_changed, employee.manager) {
                    check_manager_assignment(employee.id, manager, |id| {
                        self.employees.get(id).map(|e| e.manager)
                    })?;
                }
                self.check_employee_unique(&employee, Some(employee.id))?;
                employee.version = expected_version + 1;
                let id = employee.id;
                let next_id = self.employees.next_id;
                let revert = self.employees.put(id, employee, next_id);
                Ok((id, Undo::Employee(revert)))
            }
            Write::InsertAttendance(mut record) => {
                self.employees.get(record.employee)?;
                self.check_attendance_unique(&record, None)?;
                let next_id = self.attendance.next_id;
                record.id = self.attendance.allocate(record.id)?;
                record.version = 0;
                let id = record.id;
                let revert = self.attendance.put(id, record, next_id);
                Ok((id, Undo::Attendance(revert)))
            }
            Write::UpdateAttendance {
                mut record,
                expected_version,
            } => {
                let stored = self.attendance.get(record.id)?;
                if stored.version != expected_version {
                    return Err(RecordsError::Transaction {
                        message: format!(
                            "attendance record {} was modified concurrently (expected version {}, found {})",
                            record.id, expected_version, stored.version
                        ),
                    });
                }
                self.employees.get(record.employee)?;
                self.check_attendance_unique(&record, Some(record.id))?;
                record.version = expected_version + 1;
                let id = record.id;
                let next_id = self.attendance.next_id;
                let revert = self.attendance.put(id, record, next_id);
                Ok((id, Undo::Attendance(revert)))
            }
            Write::InsertPromotion(mut history) => {
                self.employees.get(history.employee)?;
                self.job_titles.require(history.previous_job_title)?;
                self.job_titles.require(history.new_job_title)?;
                self.departments.require(history.previous_department)?;
                self.departments.require(history.new_department)?;
                let next_id = self.promotions.next_id;
                history.id = self.promotions.allocate(history.id)?;
                let id = history.id;
                let revert = self.promotions.put(id, history, next_id);
                Ok((id, Undo::Promotion(revert)))
            }
        }
    }

    /// Reverts applied writes, newest first.
    fn roll_back(&mut self, applied: Vec<Undo>) {
        for undo in applied.into_iter().rev() {
            match undo {
                Undo::Department(revert) => self.departments.revert(revert),
                Undo::JobTitle(revert) => self.job_titles.revert(revert),
                Undo::Employee(revert) => self.employees.revert(revert),
                Undo::Attendance(revert) => self.attendance.revert(revert),
                Undo::Promotion(revert) => self.promotions.revert(revert),
            }
        }
    }

    fn check_employee_references(&self, employee: &Employee) -> RecordsResult<()> {
        self.departments.require(employee.department)?;
        self.job_titles.require(employee.job_title)?;
        self.employees.require(employee.manager)
    }

    fn check_employee_unique(&self, employee: &Employee, existing: Option<u64>) -> RecordsResult<()> {
        let others = self
            .employees
            .rows
            .values()
            .filter(|e| Some(e.id) != existing);
        for other in others {
            if other.employee_id == employee.employee_id {
                return Err(RecordsError::Conflict {
                    message: format!("employee id '{}' is already in use", employee.employee_id),
                });
            }
            if other.email.eq_ignore_ascii_case(&employee.email) {
                return Err(RecordsError::Conflict {
                    message: format!("email '{}' is already in use", employee.email),
                });
            }
        }
        Ok(())
    }

    fn check_attendance_unique(
        &self,
        record: &AttendanceRecord,
        existing: Option<u64>,
    ) -> RecordsResult<()> {
        let taken = self.attendance.rows.values().any(|r| {
            Some(r.id) != existing && r.employee == record.employee && r.date == record.date
        });
        if taken {
            return Err(RecordsError::Conflict {
                message: format!(
                    "attendance already recorded for employee {} on {}",
                    record.employee, record.date
                ),
            });
        }
        Ok(())
    }

    fn clear_job_titles(&mut self, removed: &HashSet<u64>) {
        for employee in self.employees.rows.values_mut() {
            if employee.job_title.is_some_and(|id| removed.contains(&id)) {
                employee.job_title = None;
                employee.version += 1;
            }
        }
        for history in self.promotions.rows.values_mut() {
            if history.previous_job_title.is_some_and(|id| removed.contains(&id)) {
                history.previous_job_title = None;
            }
            if history.new_job_title.is_some_and(|id| removed.contains(&id)) {
                history.new_job_title = None;
            }
        }
    }
}

/// An [`EntityStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for InMemoryStore {
    fn department(&self, id: u64) -> RecordsResult<Department> {
        self.tables.read().departments.get(id).cloned()
    }

    fn job_title(&self, id: u64) -> RecordsResult<JobTitle> {
        self.tables.read().job_titles.get(id).cloned()
    }

    fn employee(&self, id: u64) -> RecordsResult<Employee> {
        self.tables.read().employees.get(id).cloned()
    }

    fn attendance_record(&self, id: u64) -> RecordsResult<AttendanceRecord> {
        self.tables.read().attendance.get(id).cloned()
    }

    fn job_titles_in_department(&self, department: u64) -> Vec<JobTitle> {
        self.tables
            .read()
            .job_titles
            .rows
            .values()
            .filter(|j| j.department == department)
            .cloned()
            .collect()
    }

    fn attendance_for_employee(&self, employee: u64) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .tables
            .read()
            .attendance
            .rows
            .values()
            .filter(|r| r.employee == employee)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    fn promotions_for_employee(&self, employee: u64) -> Vec<PromotionHistory> {
        let mut history: Vec<PromotionHistory> = self
            .tables
            .read()
            .promotions
            .rows
            .values()
            .filter(|p| p.employee == employee)
            .cloned()
            .collect();
        history.sort_by(|a, b| {
            b.promotion_date
                .cmp(&a.promotion_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        history
    }

    fn commit(&self, unit: UnitOfWork) -> RecordsResult<Vec<u64>> {
        let total = unit.len();
        let mut tables = self.tables.write();

        let mut ids = Vec::with_capacity(total);
        let mut applied = Vec::with_capacity(total);
        for (index, write) in unit.into_writes().into_iter().enumerate() {
            match tables.apply(write) {
                Ok((id, undo)) => {
                    ids.push(id);
                    applied.push(undo);
                }
                Err(err) => {
                    tables.roll_back(applied);
                    return Err(match err {
                        RecordsError::Transaction { .. } => err,
                        err if total > 1 => RecordsError::Transaction {
                            message: format!("write {} of {} failed: {}", index + 1, total, err),
                        },
                        err => err,
                    });
                }
            }
        }

        debug!(writes = total, ids = ?ids, "Committed unit of work");
        Ok(ids)
    }

    fn delete_department(&self, id: u64) -> RecordsResult<()> {
        let mut tables = self.tables.write();
        tables.departments.get(id)?;
        tables.departments.rows.remove(&id);

        let owned: HashSet<u64> = tables
            .job_titles
            .rows
            .values()
            .filter(|j| j.department == id)
            .map(|j| j.id)
            .collect();
        tables.job_titles.rows.retain(|job_id, _| !owned.contains(job_id));
        tables.clear_job_titles(&owned);

        for employee in tables.employees.rows.values_mut() {
            if employee.department == Some(id) {
                employee.department = None;
                employee.version += 1;
            }
        }
        for history in tables.promotions.rows.values_mut() {
            if history.previous_department == Some(id) {
                history.previous_department = None;
            }
            if history.new_department == Some(id) {
                history.new_department = None;
            }
        }

        debug!(department = id, job_titles = owned.len(), "Deleted department");
        Ok(())
    }

    fn delete_job_title(&self, id: u64) -> RecordsResult<()> {
        let mut tables = self.tables.write();
        tables.job_titles.get(id)?;
        tables.job_titles.rows.remove(&id);
        tables.clear_job_titles(&HashSet::from([id]));

        debug!(job_title = id, "Deleted job title");
        Ok(())
    }

    fn delete_employee(&self, id: u64) -> RecordsResult<()> {
        let mut tables = self.tables.write();
        tables.employees.get(id)?;
        tables.employees.rows.remove(&id);
        tables.attendance.rows.retain(|_, r| r.employee != id);
        tables.promotions.rows.retain(|_, p| p.employee != id);

        for employee in tables.employees.rows.values_mut() {
            if employee.manager == Some(id) {
                employee.manager = None;
                employee.version += 1;
            }
        }

        debug!(employee = id, "Deleted employee");
        Ok(())
    }
}
