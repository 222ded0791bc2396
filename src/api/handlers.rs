//! HTTP request handlers for the employee records API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::RecordsError;
use crate::models::JobTitleSummary;
use crate::records::{assign_manager, promote_employee, save_attendance, update_attendance};

use super::request::{AttendanceRequest, ManagerRequest, PromotionRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/job-titles/:department_id",
            get(job_titles_by_department_handler),
        )
        .route("/attendance", post(create_attendance_handler))
        .route("/attendance/:id", put(update_attendance_handler))
        .route("/employees/:id/attendance", get(employee_attendance_handler))
        .route("/employees/:id/promotions", get(employee_promotions_handler))
        .route("/employees/:id/manager", put(assign_manager_handler))
        .route("/promotions", post(create_promotion_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, error: RecordsError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

/// Handler for GET /api/job-titles/:department_id.
///
/// Returns `[{id, title, base_salary}, ...]` for the department's job titles.
/// An unknown department has no job titles.
async fn job_titles_by_department_handler(
    State(state): State<AppState>,
    Path(department_id): Path<u64>,
) -> Response {
    let job_titles: Vec<JobTitleSummary> = state
        .store()
        .job_titles_in_department(department_id)
        .iter()
        .map(JobTitleSummary::from)
        .collect();

    info!(
        department = department_id,
        count = job_titles.len(),
        "Job titles looked up"
    );
    json_response(StatusCode::OK, job_titles)
}

/// Handler for POST /attendance.
async fn create_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match save_attendance(
        state.store(),
        request.into(),
        &state.attendance_rules(),
        Utc::now(),
    ) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                attendance_id = record.id,
                duration_us = start_time.elapsed().as_micros(),
                "Attendance saved"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /attendance/:id.
async fn update_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, attendance_id = id, "Processing attendance update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match update_attendance(state.store(), id, request.into(), &state.attendance_rules()) {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:id/attendance.
async fn employee_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.store().employee(id) {
        return error_response(correlation_id, err);
    }
    json_response(StatusCode::OK, state.store().attendance_for_employee(id))
}

/// Handler for GET /employees/:id/promotions.
async fn employee_promotions_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    if let Err(err) = state.store().employee(id) {
        return error_response(correlation_id, err);
    }
    json_response(StatusCode::OK, state.store().promotions_for_employee(id))
}

/// Handler for POST /promotions.
async fn create_promotion_handler(
    State(state): State<AppState>,
    payload: Result<Json<PromotionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing promotion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match promote_employee(state.store(), &request.into(), Utc::now()) {
        Ok(history) => {
            info!(
                correlation_id = %correlation_id,
                promotion_id = history.id,
                duration_us = start_time.elapsed().as_micros(),
                "Promotion committed"
            );
            json_response(StatusCode::CREATED, history)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employees/:id/manager.
async fn assign_manager_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<ManagerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match assign_manager(state.store(), id, request.manager, Utc::now()) {
        Ok(employee) => json_response(StatusCode::OK, employee),
        Err(err) => error_response(correlation_id, err),
    }
}
