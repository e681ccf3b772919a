use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Airport {
    pub id: i64,
    pub name: String,
    pub closest_big_city: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AirportCreateRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub closest_big_city: String,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Route {
    pub id: i64,
    pub source_id: i64,
    pub destination_id: i64,
    pub distance: i64,
}

impl Route {
    // A route may not loop back on itself. Called once at the request
    // boundary and once more in the service right before the write; the
    // table check constraint covers whatever slips past both.
    pub fn validate_source_and_destination(source_id: i64, destination_id: i64) -> AppResult<()> {
        if source_id == destination_id {
            return Err(AppError::ValidationError(
                "source and destination airports must be different".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RouteCreateRequest {
    pub source_id: i64,
    pub destination_id: i64,
    #[validate(range(min = 1))]
    pub distance: i64,
}

// List shape: city labels, the way routes read on a departures board
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RouteListItem {
    pub id: i64,
    pub source: String,
    pub destination: String,
    pub distance: i64,
}

#[derive(Debug, Serialize)]
pub struct RouteDetail {
    pub id: i64,
    pub source: Airport,
    pub destination: Airport,
    pub distance: i64,
}
