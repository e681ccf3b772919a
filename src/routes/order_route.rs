use crate::models::order::{OrderCreateRequest, OrderListResponse, OrderResponse};
use crate::services::order_service::OrderService;
use crate::utils::error::AppError;
use crate::utils::jwt::AuthenticatedUser;
use rocket::serde::json::Json;
use rocket::State;

/// The caller's own orders, newest first
#[get("/orders")]
pub async fn list_orders(
    auth: AuthenticatedUser,
    order_service: &State<OrderService>,
) -> Result<Json<OrderListResponse>, AppError> {
    Ok(Json(order_service.list_orders(auth.user_id).await?))
}

/// Create an order with its tickets as one atomic unit. The owner comes
/// from the token, never from the payload.
#[post("/orders", format = "json", data = "<request>")]
pub async fn create_order(
    request: Json<OrderCreateRequest>,
    auth: AuthenticatedUser,
    order_service: &State<OrderService>,
) -> Result<Json<OrderResponse>, AppError> {
    let response = order_service
        .create_order(auth.user_id, request.into_inner())
        .await?;

    Ok(Json(response))
}

#[get("/orders/<id>")]
pub async fn get_order(
    id: i64,
    auth: AuthenticatedUser,
    order_service: &State<OrderService>,
) -> Result<Json<OrderResponse>, AppError> {
    Ok(Json(order_service.get_order(auth.user_id, id).await?))
}
