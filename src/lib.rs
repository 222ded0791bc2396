//! Employee records core.
//!
//! This crate implements the non-trivial logic of an employee records
//! manager: deriving worked hours and overtime from clock-in/clock-out
//! times (including shifts that span midnight), and the promotion
//! transaction that atomically snapshots an employee's assignment into
//! history and applies a new one. A small axum API exposes both, plus a
//! job-title lookup by department.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod records;
pub mod store;
