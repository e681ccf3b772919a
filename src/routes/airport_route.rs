use crate::models::airport::{
    Airport, AirportCreateRequest, Route, RouteCreateRequest, RouteDetail, RouteListItem,
};
use crate::services::catalog_service::CatalogService;
use crate::services::flight_service::FlightService;
use crate::utils::error::AppError;
use crate::utils::jwt::{AdminUser, AuthenticatedUser};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

#[get("/airports")]
pub async fn list_airports(
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Vec<Airport>>, AppError> {
    Ok(Json(catalog_service.list_airports().await?))
}

#[post("/airports", format = "json", data = "<request>")]
pub async fn create_airport(
    request: Json<AirportCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Airport>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.create_airport(request).await?))
}

#[get("/airports/<id>")]
pub async fn get_airport(
    id: i64,
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Airport>, AppError> {
    Ok(Json(catalog_service.get_airport(id).await?))
}

#[put("/airports/<id>", format = "json", data = "<request>")]
pub async fn update_airport(
    id: i64,
    request: Json<AirportCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Airport>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.update_airport(id, request).await?))
}

/// List routes, filterable by city (ex. ?source=Kyiv&destination=Lviv)
#[get("/routes?<source>&<destination>")]
pub async fn list_routes(
    source: Option<String>,
    destination: Option<String>,
    _auth: AuthenticatedUser,
    flight_service: &State<FlightService>,
) -> Result<Json<Vec<RouteListItem>>, AppError> {
    Ok(Json(flight_service.list_routes(source, destination).await?))
}

#[post("/routes", format = "json", data = "<request>")]
pub async fn create_route(
    request: Json<RouteCreateRequest>,
    _admin: AdminUser,
    flight_service: &State<FlightService>,
) -> Result<Json<RouteDetail>, AppError> {
    let request = request.into_inner();
    request.validate()?;
    // Boundary half of the double validation; the service runs it again
    Route::validate_source_and_destination(request.source_id, request.destination_id)?;

    Ok(Json(flight_service.create_route(request).await?))
}

#[get("/routes/<id>")]
pub async fn get_route(
    id: i64,
    _auth: AuthenticatedUser,
    flight_service: &State<FlightService>,
) -> Result<Json<RouteDetail>, AppError> {
    Ok(Json(flight_service.get_route(id).await?))
}

#[put("/routes/<id>", format = "json", data = "<request>")]
pub async fn update_route(
    id: i64,
    request: Json<RouteCreateRequest>,
    _admin: AdminUser,
    flight_service: &State<FlightService>,
) -> Result<Json<RouteDetail>, AppError> {
    let request = request.into_inner();
    request.validate()?;
    Route::validate_source_and_destination(request.source_id, request.destination_id)?;

    Ok(Json(flight_service.update_route(id, request).await?))
}
