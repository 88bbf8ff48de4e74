use crate::day_of_week::DayOfWeek;
use crate::error::ApiError;

/// A named rule over [`DayOfWeek`], built once at startup and shared through
/// application state.
#[derive(Clone, Copy, Debug)]
pub struct DayValidator {
    name: &'static str,
    rule: fn(DayOfWeek) -> bool,
}

impl DayValidator {
    pub const fn new(name: &'static str, rule: fn(DayOfWeek) -> bool) -> Self {
        Self { name, rule }
    }

    /// Accepts Saturday and Sunday.
    pub const fn weekend() -> Self {
        Self::new("weekend", DayOfWeek::is_weekend)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn accepts(&self, day: DayOfWeek) -> bool {
        (self.rule)(day)
    }

    pub fn validate(&self, day: DayOfWeek) -> Result<DayOfWeek, ApiError> {
        if self.accepts(day) {
            Ok(day)
        } else {
            Err(ApiError::BadRequest(format!("{day} is not a {}", self.name)))
        }
    }
}
