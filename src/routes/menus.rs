use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::menus::{CreateMenuRequest, UpdateMenuRequest},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::Menu,
    response::{InsertAck, UpdateAck},
    services::menu_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(list_menus).post(create_menu))
        .route("/menu/{menu_id}", get(get_menu).patch(update_menu))
}

#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "All menus", body = Vec<Menu>)
    ),
    tag = "Menus"
)]
pub async fn list_menus(State(state): State<AppState>) -> AppResult<Json<Vec<Menu>>> {
    let resp = menu_service::list_menus(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/menu/{menu_id}",
    params(
        ("menu_id" = String, Path, description = "Menu id")
    ),
    responses(
        (status = 200, description = "Menu", body = Menu),
        (status = 404, description = "Menu not found", body = ErrorBody)
    ),
    tag = "Menus"
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> AppResult<Json<Menu>> {
    let resp = menu_service::get_menu(&state, &menu_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/menu",
    request_body = CreateMenuRequest,
    responses(
        (status = 200, description = "Menu created", body = InsertAck),
        (status = 400, description = "Invalid body", body = ErrorBody)
    ),
    tag = "Menus"
)]
pub async fn create_menu(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMenuRequest>,
) -> AppResult<Json<InsertAck>> {
    let resp = menu_service::create_menu(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/menu/{menu_id}",
    params(
        ("menu_id" = String, Path, description = "Menu id")
    ),
    request_body = UpdateMenuRequest,
    responses(
        (status = 200, description = "Menu updated, or inserted when the id is unknown", body = UpdateAck),
        (status = 400, description = "Invalid body or time window", body = ErrorBody)
    ),
    tag = "Menus"
)]
pub async fn update_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateMenuRequest>,
) -> AppResult<Json<UpdateAck>> {
    let resp = menu_service::upsert_menu(&state, &menu_id, payload).await?;
    Ok(Json(resp))
}
