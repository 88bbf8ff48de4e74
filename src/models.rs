use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::day_of_week::DayOfWeek;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct WeekendRequest {
    pub day: DayOfWeek,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct WeekendResponse {
    #[schema(example = "success")]
    pub status: String,
    pub weekend: DayOfWeek,
}

impl WeekendResponse {
    pub fn success(weekend: DayOfWeek) -> Self {
        Self {
            status: "success".to_string(),
            weekend,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "error")]
    pub status: String,
    #[schema(example = "Wednesday is not a weekend")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
