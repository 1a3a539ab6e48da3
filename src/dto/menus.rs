use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_window"))]
pub struct CreateMenuRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

fn validate_create_window(req: &CreateMenuRequest) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (req.start_date, req.end_date) {
        if end <= start {
            let mut error = ValidationError::new("menu_window");
            error.message = Some("end_date must be after start_date".into());
            return Err(error);
        }
    }
    Ok(())
}

/// A rescheduled menu must open in the future and close after it opens.
pub fn in_time_span(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start > now && end > start
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn create_rejects_inverted_window() {
        let now = Utc::now();
        let req = CreateMenuRequest {
            name: "Dinner".into(),
            category: "Evening".into(),
            start_date: Some(now),
            end_date: Some(now - Duration::hours(1)),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_accepts_open_window() {
        let req = CreateMenuRequest {
            name: "Dinner".into(),
            category: "Evening".into(),
            start_date: None,
            end_date: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn time_span_requires_future_start() {
        let now = Utc::now();
        assert!(in_time_span(now + Duration::hours(1), now + Duration::hours(2), now));
        assert!(!in_time_span(now - Duration::hours(1), now + Duration::hours(2), now));
        assert!(!in_time_span(now + Duration::hours(2), now + Duration::hours(1), now));
    }
}
