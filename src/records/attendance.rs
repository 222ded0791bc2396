//! Recording attendance.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::{AttendanceRules, classify_day, compute_attendance};
use crate::error::RecordsResult;
use crate::models::{AttendanceRecord, AttendanceStatus};
use crate::store::{EntityStore, UnitOfWork, Write};

use super::committed_id;

/// The user-entered part of an attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee the day belongs to.
    pub employee: u64,
    /// The calendar day.
    pub date: NaiveDate,
    /// Clock-in time of day.
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time of day.
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Explicit status. When absent the status is derived from the hours.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl AttendanceEntry {
    fn into_record(self, base: AttendanceRecord) -> AttendanceRecord {
        AttendanceRecord {
            employee: self.employee,
            date: self.date,
            clock_in: self.clock_in,
            clock_out: self.clock_out,
            break_minutes: self.break_minutes,
            status: self.status.unwrap_or(base.status),
            notes: self.notes,
            ..base
        }
    }
}

/// Derives hours (and the status, unless one was given) before the record is stored.
fn derive_hours(record: &mut AttendanceRecord, explicit_status: bool, rules: &AttendanceRules) {
    record.apply(compute_attendance(record, rules));
    if !explicit_status {
        record.status = classify_day(record, rules);
    }
}

/// Records a new day of attendance.
///
/// # Errors
///
/// - [`RecordsError::NotFound`](crate::error::RecordsError::NotFound) if the employee does not exist.
/// - [`RecordsError::Conflict`](crate::error::RecordsError::Conflict) if the employee already has a
///   record for that date; the existing record is left untouched.
pub fn save_attendance(
    store: &dyn EntityStore,
    entry: AttendanceEntry,
    rules: &AttendanceRules,
    now: DateTime<Utc>,
) -> RecordsResult<AttendanceRecord> {
    store.employee(entry.employee)?;

    let explicit_status = entry.status.is_some();
    let mut record = entry.into_record(AttendanceRecord {
        id: 0,
        employee: 0,
        date: NaiveDate::MIN,
        clock_in: None,
        clock_out: None,
        break_minutes: 0,
        hours_worked: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        status: AttendanceStatus::default(),
        notes: String::new(),
        created_at: now,
        version: 0,
    });
    derive_hours(&mut record, explicit_status, rules);

    let ids = store.commit(UnitOfWork::new().with(Write::InsertAttendance(record.clone())))?;
    record.id = committed_id(&ids, 0)?;

    info!(
        attendance_id = record.id,
        employee = record.employee,
        date = %record.date,
        hours_worked = %record.hours_worked,
        overtime_hours = %record.overtime_hours,
        "Attendance recorded"
    );
    Ok(record)
}

/// Replaces the user-entered fields of an existing record and re-derives its hours.
///
/// Derivation starts from the stored hours, so a record without both clocks
/// keeps its stored values, and sticky overtime carries over.
///
/// # Errors
///
/// - [`RecordsError::NotFound`](crate::error::RecordsError::NotFound) if the record or employee does not exist.
/// - [`RecordsError::Conflict`](crate::error::RecordsError::Conflict) if the new `(employee, date)` is
///   already taken by another record.
/// - [`RecordsError::Transaction`](crate::error::RecordsError::Transaction) if the record changed
///   between the read and the commit.
pub fn update_attendance(
    store: &dyn EntityStore,
    id: u64,
    entry: AttendanceEntry,
    rules: &AttendanceRules,
) -> RecordsResult<AttendanceRecord> {
    let stored = store.attendance_record(id)?;
    store.employee(entry.employee)?;

    let expected_version = stored.version;
    let explicit_status = entry.status.is_some();
    let mut record = entry.into_record(stored);
    derive_hours(&mut record, explicit_status, rules);

    store.commit(UnitOfWork::new().with(Write::UpdateAttendance {
        record: record.clone(),
        expected_version,
    }))?;
    record.version = expected_version + 1;

    debug!(
        attendance_id = record.id,
        hours_worked = %record.hours_worked,
        overtime_hours = %record.overtime_hours,
        "Attendance updated"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::OvertimePolicy;
    use crate::error::RecordsError;
    use crate::models::{Employee, EmployeeStatus};
    use crate::store::InMemoryStore;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(s: &str) -> Option<NaiveTime> {
        Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
    }

    fn store_with_employee() -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .commit(UnitOfWork::new().with(Write::InsertEmployee(Employee {
                id: 0,
                employee_id: "EMP-1".to_string(),
                first_name: "Mary".to_string(),
                last_name: "Jackson".to_string(),
                email: "mary@example.com".to_string(),
                phone: String::new(),
                address: String::new(),
                date_of_birth: None,
                gender: None,
                department: None,
                job_title: None,
                hire_date: NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
                salary: decimal("52000"),
                status: EmployeeStatus::Active,
                manager: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
                version: 0,
            })))
            .unwrap();
        store
    }

    fn entry(clock_in: &str, clock_out: Option<&str>, break_minutes: u32) -> AttendanceEntry {
        AttendanceEntry {
            employee: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            clock_in: time(clock_in),
            clock_out: clock_out.and_then(time),
            break_minutes,
            status: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_save_computes_hours_and_status() {
        let store = store_with_employee();
        let rules = AttendanceRules::default();

        let record = save_attendance(&store, entry("08:00", Some("19:00"), 60), &rules, Utc::now())
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.hours_worked, decimal("10.00"));
        assert_eq!(record.overtime_hours, decimal("2.00"));
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(store.attendance_record(1).unwrap(), record);
    }

    #[test]
    fn test_save_overnight_shift() {
        let store = store_with_employee();

        let record = save_attendance(
            &store,
            entry("22:00", Some("06:00"), 30),
            &AttendanceRules::default(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(record.hours_worked, decimal("7.50"));
        assert_eq!(record.overtime_hours, Decimal::ZERO);
        assert_eq!(record.status, AttendanceStatus::Partial);
    }

    #[test]
    fn test_explicit_status_wins() {
        let store = store_with_employee();
        let mut e = entry("09:00", Some("11:00"), 0);
        e.status = Some(AttendanceStatus::Present);

        let record = save_attendance(&store, e, &AttendanceRules::default(), Utc::now()).unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
    }

    #[test]
    fn test_unknown_employee_is_not_found() {
        let store = InMemoryStore::new();

        let err = save_attendance(
            &store,
            entry("09:00", Some("17:00"), 0),
            &AttendanceRules::default(),
            Utc::now(),
        )
        .unwrap_err();
        assert_eq!(err, RecordsError::NotFound { entity: "employee", id: 1 });
    }

    #[test]
    fn test_second_record_same_day_conflicts() {
        let store = store_with_employee();
        let rules = AttendanceRules::default();
        save_attendance(&store, entry("09:00", Some("17:00"), 0), &rules, Utc::now()).unwrap();

        let err = save_attendance(&store, entry("10:00", Some("12:00"), 0), &rules, Utc::now())
            .unwrap_err();

        assert!(matches!(err, RecordsError::Conflict { .. }));
        let records = store.attendance_for_employee(1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hours_worked, decimal("8.00"));
    }

    #[test]
    fn test_update_without_clock_out_keeps_stored_hours() {
        let store = store_with_employee();
        let rules = AttendanceRules::default();
        let saved =
            save_attendance(&store, entry("08:00", Some("19:00"), 60), &rules, Utc::now()).unwrap();

        let updated = update_attendance(&store, saved.id, entry("08:00", None, 15), &rules).unwrap();

        assert_eq!(updated.hours_worked, decimal("10.00"));
        assert_eq!(updated.overtime_hours, decimal("2.00"));
        assert_eq!(updated.break_minutes, 15);
        assert_eq!(updated.created_at, saved.created_at);
    }

    #[test]
    fn test_update_with_sticky_policy_keeps_overtime() {
        let store = store_with_employee();
        let rules = AttendanceRules::default();
        let saved =
            save_attendance(&store, entry("08:00", Some("19:00"), 60), &rules, Utc::now()).unwrap();

        let updated =
            update_attendance(&store, saved.id, entry("09:00", Some("15:00"), 0), &rules).unwrap();

        assert_eq!(updated.hours_worked, decimal("6.00"));
        assert_eq!(updated.overtime_hours, decimal("2.00"));
    }

    #[test]
    fn test_update_with_recompute_policy_resets_overtime() {
        let store = store_with_employee();
        let rules = AttendanceRules {
            overtime_policy: OvertimePolicy::Recompute,
            ..AttendanceRules::default()
        };
        let saved =
            save_attendance(&store, entry("08:00", Some("19:00"), 60), &rules, Utc::now()).unwrap();

        let updated =
            update_attendance(&store, saved.id, entry("09:00", Some("15:00"), 0), &rules).unwrap();

        assert_eq!(updated.overtime_hours, Decimal::ZERO);
        assert_eq!(store.attendance_record(saved.id).unwrap().overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_update_returns_stored_version() {
        let store = store_with_employee();
        let rules = AttendanceRules::default();
        let saved =
            save_attendance(&store, entry("09:00", Some("17:00"), 0), &rules, Utc::now()).unwrap();

        update_attendance(&store, saved.id, entry("09:00", Some("16:00"), 0), &rules).unwrap();
        let updated =
            update_attendance(&store, saved.id, entry("09:00", Some("18:00"), 0), &rules).unwrap();

        assert_eq!(updated.version, 2);
        assert_eq!(store.attendance_record(saved.id).unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_record_is_not_found() {
        let store = store_with_employee();

        let err = update_attendance(
            &store,
            77,
            entry("09:00", Some("17:00"), 0),
            &AttendanceRules::default(),
        )
        .unwrap_err();
        assert_eq!(err, RecordsError::NotFound { entity: "attendance record", id: 77 });
    }
}
