use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::food::{CreateFoodRequest, FoodList, UpdateFoodRequest},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::Food,
    response::{InsertAck, UpdateAck},
    routes::params::Pagination,
    services::food_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/food", get(list_food).post(create_food))
        .route("/food/{food_id}", get(get_food).patch(update_food))
}

#[utoipa::path(
    get,
    path = "/food",
    params(Pagination),
    responses(
        (status = 200, description = "One page of food items", body = FoodList),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    ),
    tag = "Food"
)]
pub async fn list_food(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<FoodList>> {
    let resp = food_service::list_food(&state, &query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/food/{food_id}",
    params(
        ("food_id" = String, Path, description = "Food id")
    ),
    responses(
        (status = 200, description = "Food item", body = Food),
        (status = 404, description = "Food not found", body = ErrorBody)
    ),
    tag = "Food"
)]
pub async fn get_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
) -> AppResult<Json<Food>> {
    let resp = food_service::get_food(&state, &food_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/food",
    request_body = CreateFoodRequest,
    responses(
        (status = 200, description = "Food created", body = InsertAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Menu was not found", body = ErrorBody)
    ),
    tag = "Food"
)]
pub async fn create_food(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFoodRequest>,
) -> AppResult<Json<InsertAck>> {
    let resp = food_service::create_food(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/food/{food_id}",
    params(
        ("food_id" = String, Path, description = "Food id")
    ),
    request_body = UpdateFoodRequest,
    responses(
        (status = 200, description = "Food updated, or inserted when the id is unknown", body = UpdateAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Menu was not found", body = ErrorBody)
    ),
    tag = "Food"
)]
pub async fn update_food(
    State(state): State<AppState>,
    Path(food_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateFoodRequest>,
) -> AppResult<Json<UpdateAck>> {
    let resp = food_service::upsert_food(&state, &food_id, payload).await?;
    Ok(Json(resp))
}
