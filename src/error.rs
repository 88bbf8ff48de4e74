use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::day_of_week::DayOfWeekError;
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<DayOfWeekError> for ApiError {
    fn from(value: DayOfWeekError) -> Self {
        warn!("{value}");
        match value {
            DayOfWeekError::InvalidDayOfWeek(input) => {
                ApiError::BadRequest(format!("Invalid weekend: {input}"))
            }
            DayOfWeekError::OrdinalOutOfRange(_) => ApiError::Internal(value.to_string()),
        }
    }
}
