//! Core data models for the employee records core.
//!
//! Rows reference each other by numeric identifier. Optional references
//! (`Option<u64>`) follow set-null-on-delete: when the referent is deleted the
//! store clears the reference instead of deleting the referencing row.

mod attendance;
mod department;
mod employee;
mod job_title;
mod promotion;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use department::Department;
pub use employee::{Employee, EmployeeStatus, Gender};
pub use job_title::{JobTitle, JobTitleSummary};
pub use promotion::PromotionHistory;
