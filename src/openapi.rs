use utoipa::OpenApi;

use crate::day_of_week::DayOfWeek;
use crate::models::{ErrorResponse, WeekendRequest, WeekendResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::get_weekend,
        crate::handlers::validate_weekend
    ),
    components(schemas(DayOfWeek, WeekendRequest, WeekendResponse, ErrorResponse)),
    tags(
        (name = "weekends", description = "Weekend day validation")
    ),
)]
pub struct ApiDoc;
