use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::Order,
    response::{InsertAck, UpdateAck},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", get(list_orders).post(create_order))
        .route("/order/{order_id}", get(get_order).patch(update_order))
}

#[utoipa::path(
    get,
    path = "/order",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let resp = order_service::list_orders(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/order/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 404, description = "Order not found", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Order>> {
    let resp = order_service::get_order(&state, &order_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = InsertAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Table was not found", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<Json<InsertAck>> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/order/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated, or inserted when the id is unknown", body = UpdateAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Table was not found", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderRequest>,
) -> AppResult<Json<UpdateAck>> {
    let resp = order_service::upsert_order(&state, &order_id, payload).await?;
    Ok(Json(resp))
}
