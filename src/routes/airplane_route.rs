use crate::models::airplane::{
    AirplaneCreateRequest, AirplaneDetail, AirplaneListItem, AirplaneType,
    AirplaneTypeCreateRequest,
};
use crate::services::catalog_service::CatalogService;
use crate::utils::error::AppError;
use crate::utils::jwt::{AdminUser, AuthenticatedUser};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

#[get("/airplane_types")]
pub async fn list_airplane_types(
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Vec<AirplaneType>>, AppError> {
    Ok(Json(catalog_service.list_airplane_types().await?))
}

#[post("/airplane_types", format = "json", data = "<request>")]
pub async fn create_airplane_type(
    request: Json<AirplaneTypeCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<AirplaneType>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.create_airplane_type(request).await?))
}

#[get("/airplane_types/<id>")]
pub async fn get_airplane_type(
    id: i64,
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<AirplaneType>, AppError> {
    Ok(Json(catalog_service.get_airplane_type(id).await?))
}

#[put("/airplane_types/<id>", format = "json", data = "<request>")]
pub async fn update_airplane_type(
    id: i64,
    request: Json<AirplaneTypeCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<AirplaneType>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.update_airplane_type(id, request).await?))
}

/// List airplanes, optionally filtered by type ids (ex. ?airplane_types=1,2)
#[get("/airplanes?<airplane_types>")]
pub async fn list_airplanes(
    airplane_types: Option<String>,
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Vec<AirplaneListItem>>, AppError> {
    Ok(Json(catalog_service.list_airplanes(airplane_types).await?))
}

#[post("/airplanes", format = "json", data = "<request>")]
pub async fn create_airplane(
    request: Json<AirplaneCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<AirplaneDetail>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.create_airplane(request).await?))
}

#[get("/airplanes/<id>")]
pub async fn get_airplane(
    id: i64,
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<AirplaneDetail>, AppError> {
    Ok(Json(catalog_service.get_airplane(id).await?))
}

#[put("/airplanes/<id>", format = "json", data = "<request>")]
pub async fn update_airplane(
    id: i64,
    request: Json<AirplaneCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<AirplaneDetail>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.update_airplane(id, request).await?))
}
