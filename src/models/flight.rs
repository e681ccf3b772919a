use crate::models::airplane::AirplaneListItem;
use crate::models::airport::RouteDetail;
use crate::utils::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, sqlx::FromRow)]
pub struct Flight {
    pub id: i64,
    pub route_id: i64,
    pub airplane_id: i64,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl Flight {
    // A flight must land strictly after it takes off. Called at the request
    // boundary and again in the service before the write; backstopped by the
    // check constraint on the flight table.
    pub fn validate_departure_and_arrival(
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> AppResult<()> {
        if departure_time >= arrival_time {
            return Err(AppError::ValidationError(format!(
                "departure time {} must be before arrival time {}",
                departure_time, arrival_time
            )));
        }
        Ok(())
    }
}

// Flight joined to its airplane's seat grid; everything ticket validation
// needs to know about a flight.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct FlightSeatBounds {
    pub flight_id: i64,
    pub rows: i64,
    pub seats_in_row: i64,
}

#[derive(Debug, Deserialize)]
pub struct FlightCreateRequest {
    pub route_id: i64,
    pub airplane_id: i64,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    #[serde(default)]
    pub crew_ids: Vec<i64>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct FlightListItem {
    pub id: i64,
    pub route: String,
    pub departure_time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FlightDetail {
    pub id: i64,
    pub route: RouteDetail,
    pub airplane: AirplaneListItem,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crews: Vec<String>,
}
