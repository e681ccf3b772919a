use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AirplaneType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Airplane {
    pub id: i64,
    pub name: String,
    pub rows: i64,
    pub seats_in_row: i64,
    pub airplane_type_id: i64,
}

impl Airplane {
    pub fn capacity(&self) -> i64 {
        self.rows * self.seats_in_row
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AirplaneTypeCreateRequest {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AirplaneCreateRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub rows: i64,
    #[validate(range(min = 1))]
    pub seats_in_row: i64,
    pub airplane_type_id: i64,
}

// List shape: capacity and the type name instead of the raw grid
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AirplaneListItem {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub airplane_type: String,
}

#[derive(Debug, Serialize)]
pub struct AirplaneDetail {
    pub id: i64,
    pub name: String,
    pub rows: i64,
    pub seats_in_row: i64,
    pub capacity: i64,
    pub airplane_type: String,
}
