//! Attendance record model.
//!
//! `hours_worked` and `overtime_hours` are derived values: they are written
//! from [`crate::calculation::compute_attendance`] before the record is stored.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AttendanceComputation;

/// Status of an employee's day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worked a full day.
    #[default]
    Present,
    /// Did not work.
    Absent,
    /// Worked part of the day.
    Partial,
    /// Sick leave.
    Sick,
    /// Vacation leave.
    Vacation,
}

impl AttendanceStatus {
    /// Returns true for statuses that represent approved leave.
    pub fn is_leave(self) -> bool {
        matches!(self, AttendanceStatus::Sick | AttendanceStatus::Vacation)
    }
}

/// One employee's attendance for one calendar day.
///
/// At most one record exists per `(employee, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Store-assigned identifier (0 until inserted).
    #[serde(default)]
    pub id: u64,
    /// The employee this record belongs to.
    pub employee: u64,
    /// The calendar day.
    pub date: NaiveDate,
    /// Time of day the employee clocked in.
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
    /// Time of day the employee clocked out. Earlier than `clock_in` means
    /// the shift ended the following day.
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Unpaid break taken, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Derived hours worked (2 decimal places, may be negative).
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Derived overtime hours (2 decimal places).
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Status of the day.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// When the row was created.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every update.
    #[serde(default)]
    pub version: u64,
}

impl AttendanceRecord {
    /// Writes derived hours onto the record.
    pub fn apply(&mut self, computation: AttendanceComputation) {
        self.hours_worked = computation.hours_worked;
        self.overtime_hours = computation.overtime_hours;
    }
}
