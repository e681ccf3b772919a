use crate::utils::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub created_time: DateTime<Utc>,
    pub user_id: i64,
}

#[allow(dead_code)]
#[derive(Debug, sqlx::FromRow)]
pub struct Ticket {
    pub id: i64,
    pub seat: i64,
    pub flight_id: i64,
    pub order_id: i64,
    pub row: i64,
}

impl Ticket {
    /// Check that a (row, seat) pair falls inside an airplane's seat grid.
    ///
    /// Row is checked before seat and the first field out of range fails the
    /// whole pair; the error names the field and its valid range. Pure, so the
    /// same function gates both the request boundary and the insert itself.
    pub fn validate_seat(row: i64, seat: i64, rows: i64, seats_in_row: i64) -> AppResult<()> {
        for (value, field, bound) in [(row, "row", rows), (seat, "seat", seats_in_row)] {
            if !(1..=bound).contains(&value) {
                return Err(AppError::ValidationError(format!(
                    "{} number must be in available range (1, {})",
                    field, bound
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketSpec {
    pub row: i64,
    pub seat: i64,
    pub flight_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreateRequest {
    pub tickets: Vec<TicketSpec>,
}

// Ticket as it appears inside an order response: seat plus a short
// "Source-Destination" label for the flight
#[derive(Debug, Serialize)]
pub struct TicketDetail {
    pub id: i64,
    pub row: i64,
    pub seat: i64,
    pub flight_id: i64,
    pub flight: String,
    pub departure_time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub created_time: DateTime<Utc>,
    pub tickets: Vec<TicketDetail>,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
}
