//! HTTP request handlers for the GPA engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{GradeScale, calculate, compute_with_policy, tiers};
use crate::report::build_artifact;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/scale", get(scale_handler))
        .route("/scale/:score", get(score_handler))
        .route("/tiers", get(tiers_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Returns the audited GPA calculation as JSON.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let courses = request.into_courses();

    match calculate(&courses, state.config().config()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                course_count = courses.len(),
                gpa = %calculation.display_gpa,
                severity = ?calculation.tier.severity,
                duration_us = calculation.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(calculation)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /report.
///
/// Returns the plain-text report as a file attachment.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let courses = request.into_courses();
    let config = state.config();

    match compute_with_policy(&courses, config.unknown_grade_policy()) {
        Ok(result) => {
            let artifact = build_artifact(&courses, &result, &config.config().report);
            info!(
                correlation_id = %correlation_id,
                filename = %artifact.filename,
                bytes = artifact.body.len(),
                "Report rendered"
            );
            (
                StatusCode::OK,
                [
                    (
                        header::CONTENT_TYPE,
                        format!("{}; charset=utf-8", artifact.mime_type),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", artifact.filename),
                    ),
                ],
                artifact.body,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /scale.
async fn scale_handler() -> Response {
    Json(GradeScale::all()).into_response()
}

/// Handler for GET /scale/:score.
///
/// Every score the path can carry, numeric or not, is answered with JSON.
async fn score_handler(score: Result<Path<u16>, PathRejection>) -> Response {
    let score = match score {
        Ok(Path(score)) => score,
        Err(rejection) => {
            let message = rejection.body_text();
            warn!(error = %message, "Score path rejected");
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_score(message),
            }
            .into_response();
        }
    };

    match GradeScale::for_score(score) {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /tiers.
async fn tiers_handler() -> Response {
    Json(tiers()).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("VALIDATION_ERROR", body_text)
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
