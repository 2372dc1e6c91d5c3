//! HTTP request handlers for the attendance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{RestDayRule, build_records, month_bounds};
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyReport, MonthlyReport};
use crate::reporting::{ReportFormatter, TextFormatter, build_daily_report, build_monthly_report};

use super::request::SubmitAttendanceRequest;
use super::response::{
    ApiError, ApiErrorResponse, AttendanceDayResponse, SubmitAttendanceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/attendance/:date",
            get(get_attendance_handler).post(submit_attendance_handler),
        )
        .route("/reports/daily/:date", get(daily_report_handler))
        .route("/reports/daily/:date/text", get(daily_text_handler))
        .route("/reports/monthly/:year/:month", get(monthly_report_handler))
        .route(
            "/reports/monthly/:year/:month/text",
            get(monthly_text_handler),
        )
        .with_state(state)
}

fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn text_ok(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Invalid path parameters"
    );
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::new("INVALID_PATH", body_text)),
    )
        .into_response()
}

/// Handler for GET /attendance/:date.
///
/// Returns the roster, the rest-day flag and whatever is stored for the date.
async fn get_attendance_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Fetching attendance");

    match attendance_for(&state, &date) {
        Ok(body) => json_ok(body),
        Err(err) => error_response(correlation_id, err),
    }
}

fn attendance_for(state: &AppState, date: &str) -> EngineResult<AttendanceDayResponse> {
    let date = parse_date(date)?;
    let roster = &state.config().roster().staff;
    let stored = state.store().get_range(date, date)?;
    let records = roster
        .iter()
        .filter_map(|staff| stored.get(&(staff.clone(), date)).cloned())
        .collect();

    Ok(AttendanceDayResponse {
        date,
        rest_day: state.rest_days().is_rest_day(date),
        roster: roster.clone(),
        records,
    })
}

/// Handler for POST /attendance/:date.
///
/// Validates every entry, scores the valid submission and upserts the
/// resulting records. Nothing is written if any entry is rejected.
async fn submit_attendance_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
    payload: Result<Json<SubmitAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Processing attendance submission");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match submit(&state, &date, &request) {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                date = %body.date,
                entries = request.entries.len(),
                recorded = body.recorded,
                duration_us = start_time.elapsed().as_micros(),
                "Attendance recorded"
            );
            json_ok(body)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn submit(
    state: &AppState,
    date: &str,
    request: &SubmitAttendanceRequest,
) -> EngineResult<SubmitAttendanceResponse> {
    let date = parse_date(date)?;
    let records = build_records(
        state.engine(),
        state.config().roster(),
        &state.rest_days(),
        date,
        &request.entries,
    )?;
    for record in &records {
        state.store().upsert(record.clone())?;
    }

    Ok(SubmitAttendanceResponse {
        date,
        recorded: records.len(),
        records,
    })
}

fn daily_report(state: &AppState, date: &str) -> EngineResult<DailyReport> {
    let date = parse_date(date)?;
    if state.rest_days().is_rest_day(date) {
        return Err(EngineError::RestDay { date });
    }
    let records = state.store().get_range(date, date)?;
    Ok(build_daily_report(date, state.config(), &records))
}

fn monthly_report(state: &AppState, year: i32, month: u32) -> EngineResult<MonthlyReport> {
    let (first, last) = month_bounds(year, month)?;
    let records = state.store().get_range(first, last)?;
    build_monthly_report(year, month, state.config(), &state.rest_days(), &records)
}

/// Handler for GET /reports/daily/:date.
async fn daily_report_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Building daily report");

    match daily_report(&state, &date) {
        Ok(report) => json_ok(report),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /reports/daily/:date/text.
async fn daily_text_handler(State(state): State<AppState>, Path(date): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, date = %date, "Rendering daily report");

    match daily_report(&state, &date) {
        Ok(report) => text_ok(TextFormatter.render_daily(&report)),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /reports/monthly/:year/:month.
async fn monthly_report_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (year, month) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, year, month, "Building monthly report");

    let start_time = Instant::now();
    match monthly_report(&state, year, month) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                working_days = report.working_days.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly report built"
            );
            json_ok(report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /reports/monthly/:year/:month/text.
async fn monthly_text_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (year, month) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, year, month, "Rendering monthly report");

    match monthly_report(&state, year, month) {
        Ok(report) => text_ok(TextFormatter.render_monthly(&report)),
        Err(err) => error_response(correlation_id, err),
    }
}
