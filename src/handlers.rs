use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::{Json, response::IntoResponse};
use tracing::{debug, warn};

use crate::{
    AppState,
    day_of_week::DayOfWeek,
    error::ApiError,
    models::{ErrorResponse, WeekendRequest, WeekendResponse},
};

#[utoipa::path(get, path = "/", tag = "weekends")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Weekend Validator API",
        "endpoints": {
            "/weekends/{weekend}": "Check whether a day name is a weekend",
            "/weekends/validate": "Validate a JSON payload containing a day"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "weekends")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "weekends")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/weekends/{weekend}",
    params(
        ("weekend" = String, Path, description = "Day name, case-insensitive", example = "saturday")
    ),
    responses(
        (status = 200, description = "Day is a weekend", body = WeekendResponse),
        (status = 400, description = "Unknown day or not a weekend", body = ErrorResponse)
    ),
    tag = "weekends"
)]
pub async fn get_weekend(
    State(state): State<AppState>,
    uri: Uri,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<WeekendResponse>, ApiError> {
    let Path(weekend) = segment.map_err(|rejection| {
        warn!("rejected path segment: {rejection}");
        // the decoded segment is unavailable, so echo it as sent
        let raw = uri.path().rsplit('/').next().unwrap_or_default();
        ApiError::BadRequest(format!("Invalid weekend: {raw}"))
    })?;

    let day: DayOfWeek = weekend.parse()?;
    let day = state.validator.validate(day).inspect_err(|err| {
        warn!("{}", err.message());
    })?;

    debug!("{day} accepted by {} validator", state.validator.name());
    Ok(Json(WeekendResponse::success(day)))
}

#[utoipa::path(
    post,
    path = "/weekends/validate",
    request_body = WeekendRequest,
    responses(
        (status = 200, description = "Day is a weekend", body = WeekendResponse),
        (status = 400, description = "Malformed payload or not a weekend", body = ErrorResponse)
    ),
    tag = "weekends"
)]
pub async fn validate_weekend(
    State(state): State<AppState>,
    payload: Result<Json<WeekendRequest>, JsonRejection>,
) -> Result<Json<WeekendResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("rejected payload: {rejection}");
        ApiError::BadRequest(format!("Invalid request: {}", rejection.body_text()))
    })?;

    let day = state.validator.validate(request.day).inspect_err(|err| {
        warn!("{}", err.message());
    })?;

    debug!("{day} accepted by {} validator", state.validator.name());
    Ok(Json(WeekendResponse::success(day)))
}
