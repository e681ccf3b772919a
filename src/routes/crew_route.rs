use crate::models::crew::{CrewCreateRequest, CrewResponse};
use crate::services::catalog_service::CatalogService;
use crate::utils::error::AppError;
use crate::utils::jwt::{AdminUser, AuthenticatedUser};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

#[get("/crews")]
pub async fn list_crews(
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<Vec<CrewResponse>>, AppError> {
    Ok(Json(catalog_service.list_crews().await?))
}

#[post("/crews", format = "json", data = "<request>")]
pub async fn create_crew(
    request: Json<CrewCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<CrewResponse>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.create_crew(request).await?))
}

#[get("/crews/<id>")]
pub async fn get_crew(
    id: i64,
    _auth: AuthenticatedUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<CrewResponse>, AppError> {
    Ok(Json(catalog_service.get_crew(id).await?))
}

#[put("/crews/<id>", format = "json", data = "<request>")]
pub async fn update_crew(
    id: i64,
    request: Json<CrewCreateRequest>,
    _admin: AdminUser,
    catalog_service: &State<CatalogService>,
) -> Result<Json<CrewResponse>, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(Json(catalog_service.update_crew(id, request).await?))
}
