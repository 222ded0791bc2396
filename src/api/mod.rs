//! HTTP API module for the employee records service.
//!
//! This module exposes the attendance and promotion operations, and the
//! read-only job-title lookup, as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, ManagerRequest, PromotionRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
