use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::order_items::{BillSummary, OrderItemBatchRequest, UpdateOrderItemRequest},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::OrderItem,
    response::{InsertManyAck, UpdateAck},
    services::order_item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orderitems", get(list_order_items).post(create_order_items))
        .route(
            "/orderitems/{order_item_id}",
            get(get_order_item).patch(update_order_item),
        )
        .route("/orderitems-orders/{order_id}", get(items_by_order))
}

#[utoipa::path(
    get,
    path = "/orderitems",
    responses(
        (status = 200, description = "All order items", body = Vec<OrderItem>)
    ),
    tag = "Order items"
)]
pub async fn list_order_items(State(state): State<AppState>) -> AppResult<Json<Vec<OrderItem>>> {
    let resp = order_item_service::list_order_items(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orderitems/{order_item_id}",
    params(
        ("order_item_id" = String, Path, description = "Order item id")
    ),
    responses(
        (status = 200, description = "Order item", body = OrderItem),
        (status = 404, description = "Order item not found", body = ErrorBody)
    ),
    tag = "Order items"
)]
pub async fn get_order_item(
    State(state): State<AppState>,
    Path(order_item_id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    let resp = order_item_service::get_order_item(&state, &order_item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orderitems-orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Bill of the order; empty when it has no lines", body = Vec<BillSummary>),
        (status = 500, description = "Aggregation failed", body = ErrorBody)
    ),
    tag = "Order items"
)]
pub async fn items_by_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<BillSummary>>> {
    let resp = order_item_service::items_by_order(&state, &order_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orderitems",
    request_body = OrderItemBatchRequest,
    responses(
        (status = 200, description = "New order opened and its lines created", body = InsertManyAck),
        (status = 400, description = "Invalid body or line", body = ErrorBody),
        (status = 500, description = "Table was not found", body = ErrorBody)
    ),
    tag = "Order items"
)]
pub async fn create_order_items(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderItemBatchRequest>,
) -> AppResult<Json<InsertManyAck>> {
    let resp = order_item_service::create_order_items(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/orderitems/{order_item_id}",
    params(
        ("order_item_id" = String, Path, description = "Order item id")
    ),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Order item updated, or inserted when the id is unknown", body = UpdateAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Food was not found", body = ErrorBody)
    ),
    tag = "Order items"
)]
pub async fn update_order_item(
    State(state): State<AppState>,
    Path(order_item_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderItemRequest>,
) -> AppResult<Json<UpdateAck>> {
    let resp = order_item_service::upsert_order_item(&state, &order_item_id, payload).await?;
    Ok(Json(resp))
}
