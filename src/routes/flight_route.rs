use crate::models::flight::{Flight, FlightCreateRequest, FlightDetail, FlightListItem};
use crate::services::flight_service::FlightService;
use crate::utils::error::AppError;
use crate::utils::jwt::{AdminUser, AuthenticatedUser};
use rocket::serde::json::Json;
use rocket::State;

/// List flights, filterable by route (ex. ?route=Kyiv-Lviv)
#[get("/flights?<route>")]
pub async fn list_flights(
    route: Option<String>,
    _auth: AuthenticatedUser,
    flight_service: &State<FlightService>,
) -> Result<Json<Vec<FlightListItem>>, AppError> {
    Ok(Json(flight_service.list_flights(route).await?))
}

#[post("/flights", format = "json", data = "<request>")]
pub async fn create_flight(
    request: Json<FlightCreateRequest>,
    _admin: AdminUser,
    flight_service: &State<FlightService>,
) -> Result<Json<FlightDetail>, AppError> {
    let request = request.into_inner();
    // Boundary half of the double validation; the service runs it again
    Flight::validate_departure_and_arrival(request.departure_time, request.arrival_time)?;

    Ok(Json(flight_service.create_flight(request).await?))
}

#[get("/flights/<id>")]
pub async fn get_flight(
    id: i64,
    _auth: AuthenticatedUser,
    flight_service: &State<FlightService>,
) -> Result<Json<FlightDetail>, AppError> {
    Ok(Json(flight_service.get_flight(id).await?))
}

#[put("/flights/<id>", format = "json", data = "<request>")]
pub async fn update_flight(
    id: i64,
    request: Json<FlightCreateRequest>,
    _admin: AdminUser,
    flight_service: &State<FlightService>,
) -> Result<Json<FlightDetail>, AppError> {
    let request = request.into_inner();
    Flight::validate_departure_and_arrival(request.departure_time, request.arrival_time)?;

    Ok(Json(flight_service.update_flight(id, request).await?))
}
