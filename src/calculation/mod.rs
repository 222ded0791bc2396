//! Calculation logic for the employee records core.
//!
//! This module contains the pure derivations the core performs: attendance
//! hours and overtime (including shifts spanning midnight), day status
//! classification, the promotion snapshot, manager hierarchy checks, and
//! the input validation they share. Nothing here reads or writes the store.

mod attendance;
mod hierarchy;
mod promotion;
mod validation;

pub use attendance::{
    AttendanceComputation, AttendanceRules, DEFAULT_DAILY_OVERTIME_THRESHOLD,
    HOURS_DECIMAL_PLACES, OvertimePolicy, classify_day, compute_attendance, worked_hours,
};
pub use hierarchy::check_manager_assignment;
pub use promotion::{PromotionInput, PromotionPlan, plan_promotion};
pub use validation::{MAX_MONEY, MONEY_DECIMAL_PLACES, require_money, require_non_empty};
