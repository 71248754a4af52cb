//! HTTP request handlers for the categorization engine API.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Days, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::date_math::week_start;
use crate::engine::TimecardEngine;
use crate::models::{PayPeriod, Region, TimeEntry};

use super::request::CalculationRequest;
use super::response::{ApiError, CalculationResponse, HolidaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/holidays/:year", get(holidays_handler))
        .with_state(state)
}

/// Handler for the POST /calculate endpoint.
///
/// Accepts entries plus a region and pay period, and returns the
/// category-classified totals with per-week OT/DT allocations.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation id for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    // Convert request types to domain types
    let region: Region = request.region.into();
    let period: PayPeriod = request.period.into();
    let mut entries: Vec<TimeEntry> = request.entries.into_iter().map(Into::into).collect();

    if region.country.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("region country code must not be empty"),
        );
    }
    if period.start_date > period.end_date {
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("period start_date must not be after end_date"),
        );
    }
    if let Some(bad) = entries.iter().find(|e| e.hours < Decimal::ZERO) {
        warn!(
            correlation_id = %correlation_id,
            entry_id = %bad.id,
            "Negative hours in request"
        );
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!("entry {} has negative hours", bad.id)),
        );
    }

    let engine = match &request.policy_override {
        Some(overrides) => TimecardEngine::with_policy_override(
            region.clone(),
            state.config(),
            state.calendar(),
            overrides,
        ),
        None => TimecardEngine::new(region.clone(), state.config(), state.calendar()),
    };

    let range = period.range();
    if request.apply_stat_holidays {
        engine.add_stat_holidays_for_period(&mut entries, range);
    }

    let totals = engine.categorize(&entries, range);

    let mut weeks = Vec::new();
    let mut cursor = week_start(period.start_date);
    while cursor <= period.end_date {
        weeks.push(engine.week_overtime(&entries, cursor));
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    info!(
        correlation_id = %correlation_id,
        period = period.number,
        entry_count = entries.len(),
        "Calculation complete"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        region,
        period,
        totals,
        weeks,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Query parameters for the holidays endpoint.
#[derive(Debug, Deserialize)]
struct RegionQuery {
    country: String,
    #[serde(default)]
    subdivision: String,
}

/// Handler for the GET /holidays/{year} endpoint.
///
/// Returns the merged holiday list for the region; remote failures fall
/// back to the locally computed list inside the calendar, so this endpoint
/// never reports them.
async fn holidays_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<RegionQuery>,
) -> impl IntoResponse {
    if query.country.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("country query parameter must not be empty"),
        );
    }
    if !(1900..=2200).contains(&year) {
        return error_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!("year {} is out of range", year)),
        );
    }

    let region = Region::new(query.country, query.subdivision);
    let holidays = state.calendar().holidays(year, &region).await;

    let response = HolidaysResponse {
        year,
        region,
        holidays,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

fn error_response(status: StatusCode, error: ApiError) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
