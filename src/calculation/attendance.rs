//! Attendance time computation.
//!
//! This module derives worked hours and overtime from a day's clock-in,
//! clock-out and unpaid break, including shifts that run past midnight.
//! It is a pure derivation: callers apply the result to the record before
//! persisting it.

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus};

/// Default daily overtime threshold in hours.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Decimal places kept on derived hour values.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// What happens to stored overtime when a recomputation lands at or under
/// the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimePolicy {
    /// Keep the previously stored overtime value. Overtime only ever grows.
    #[default]
    Sticky,
    /// Always store `max(hours_worked - threshold, 0)`.
    Recompute,
}

/// Rules applied when deriving attendance hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRules {
    /// Hours in a day before overtime starts.
    pub daily_overtime_threshold: Decimal,
    /// How stored overtime is treated on recomputation.
    pub overtime_policy: OvertimePolicy,
}

impl Default for AttendanceRules {
    fn default() -> Self {
        Self {
            daily_overtime_threshold: DEFAULT_DAILY_OVERTIME_THRESHOLD,
            overtime_policy: OvertimePolicy::Sticky,
        }
    }
}

/// Derived hours for one attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceComputation {
    /// Hours worked after the unpaid break, 2 decimal places.
    pub hours_worked: Decimal,
    /// Hours beyond the daily threshold, 2 decimal places.
    pub overtime_hours: Decimal,
}

/// Computes worked hours and overtime for a record.
///
/// If either clock is missing, the record's stored values are returned
/// unchanged. Otherwise both times are placed on the record's date; a
/// clock-out earlier than the clock-in is moved to the next day. Hours over
/// the threshold become overtime. At or under the threshold, overtime follows
/// the configured [`OvertimePolicy`].
///
/// Defined for every input: a break longer than the shift yields negative
/// hours, and equal clock times yield zero hours.
///
/// # Examples
///
/// ```
/// use employee_records::calculation::{compute_attendance, AttendanceRules};
/// use employee_records::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveTime, Utc};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     id: 0,
///     employee: 1,
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0),
///     clock_out: NaiveTime::from_hms_opt(19, 0, 0),
///     break_minutes: 60,
///     hours_worked: Decimal::ZERO,
///     overtime_hours: Decimal::ZERO,
///     status: AttendanceStatus::Present,
///     notes: String::new(),
///     created_at: Utc::now(),
///     version: 0,
/// };
///
/// let result = compute_attendance(&record, &AttendanceRules::default());
/// assert_eq!(result.hours_worked, Decimal::new(1000, 2)); // 10.00
/// assert_eq!(result.overtime_hours, Decimal::new(200, 2)); // 2.00
/// ```
pub fn compute_attendance(
    record: &AttendanceRecord,
    rules: &AttendanceRules,
) -> AttendanceComputation {
    let (Some(clock_in), Some(clock_out)) = (record.clock_in, record.clock_out) else {
        return AttendanceComputation {
            hours_worked: record.hours_worked,
            overtime_hours: record.overtime_hours,
        };
    };

    let exact = exact_worked_hours(record.date, clock_in, clock_out, record.break_minutes);

    // The threshold is compared before rounding.
    let overtime_hours = if exact > rules.daily_overtime_threshold {
        exact - rules.daily_overtime_threshold
    } else {
        match rules.overtime_policy {
            OvertimePolicy::Sticky => record.overtime_hours,
            OvertimePolicy::Recompute => Decimal::ZERO,
        }
    };

    AttendanceComputation {
        hours_worked: exact.round_dp(HOURS_DECIMAL_PLACES),
        overtime_hours: overtime_hours.round_dp(HOURS_DECIMAL_PLACES),
    }
}

/// Hours between two times of day on `date`, minus an unpaid break.
///
/// A clock-out strictly earlier than the clock-in is treated as the next day.
/// The result is rounded to 2 decimal places (ties to even) and not clamped.
pub fn worked_hours(
    date: NaiveDate,
    clock_in: NaiveTime,
    clock_out: NaiveTime,
    break_minutes: u32,
) -> Decimal {
    exact_worked_hours(date, clock_in, clock_out, break_minutes).round_dp(HOURS_DECIMAL_PLACES)
}

fn exact_worked_hours(
    date: NaiveDate,
    clock_in: NaiveTime,
    clock_out: NaiveTime,
    break_minutes: u32,
) -> Decimal {
    let start = date.and_time(clock_in);
    let mut end = date.and_time(clock_out);
    if end < start {
        end += Duration::days(1);
    }

    let elapsed_ms = (end - start).num_milliseconds();
    let worked_ms = elapsed_ms - i64::from(break_minutes) * MILLIS_PER_MINUTE;

    Decimal::new(worked_ms, 0) / Decimal::new(MILLIS_PER_HOUR, 0)
}

/// Suggests a status for a record whose hours have already been derived.
///
/// Leave statuses are kept as entered. With no clocks at all the day is
/// absent; a single clock, or fewer hours than the daily threshold, is a
/// partial day; anything else is present.
pub fn classify_day(record: &AttendanceRecord, rules: &AttendanceRules) -> AttendanceStatus {
    if record.status.is_leave() {
        return record.status;
    }

    match (record.clock_in, record.clock_out) {
        (None, None) => AttendanceStatus::Absent,
        (Some(_), None) | (None, Some(_)) => AttendanceStatus::Partial,
        (Some(_), Some(_)) if record.hours_worked < rules.daily_overtime_threshold => {
            AttendanceStatus::Partial
        }
        (Some(_), Some(_)) => AttendanceStatus::Present,
    }
}
