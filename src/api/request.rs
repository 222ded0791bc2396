//! Request types for the employee records API.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PromotionInput;
use crate::models::AttendanceStatus;
use crate::records::AttendanceEntry;

/// Request body for `POST /attendance` and `PUT /attendance/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The employee the day belongs to.
    pub employee: u64,
    /// The calendar day.
    pub date: NaiveDate,
    /// Clock-in time of day ("HH:MM:SS").
    #[serde(default)]
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time of day ("HH:MM:SS").
    #[serde(default)]
    pub clock_out: Option<NaiveTime>,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Status of the day; derived from the hours when omitted.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl From<AttendanceRequest> for AttendanceEntry {
    fn from(req: AttendanceRequest) -> Self {
        AttendanceEntry {
            employee: req.employee,
            date: req.date,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            break_minutes: req.break_minutes,
            status: req.status,
            notes: req.notes,
        }
    }
}

/// Request body for `POST /promotions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionRequest {
    /// The employee to promote.
    pub employee: u64,
    /// The job title to assign.
    pub new_job_title: u64,
    /// The department to assign.
    pub new_department: u64,
    /// The salary to assign.
    pub new_salary: Decimal,
    /// Effective date.
    pub promotion_date: NaiveDate,
    /// Why the promotion is being made.
    pub reason: String,
    /// Identity of the approving actor.
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl From<PromotionRequest> for PromotionInput {
    fn from(req: PromotionRequest) -> Self {
        PromotionInput {
            employee: req.employee,
            new_job_title: req.new_job_title,
            new_department: req.new_department,
            new_salary: req.new_salary,
            promotion_date: req.promotion_date,
            reason: req.reason,
            approved_by: req.approved_by,
        }
    }
}

/// Request body for `PUT /employees/:id/manager`. A null manager clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerRequest {
    /// The new manager.
    pub manager: Option<u64>,
}
