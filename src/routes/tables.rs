use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::tables::{CreateTableRequest, UpdateTableRequest},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::Table,
    response::{InsertAck, UpdateAck},
    services::table_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/table", get(list_tables).post(create_table))
        .route("/table/{table_id}", get(get_table).patch(update_table))
}

#[utoipa::path(
    get,
    path = "/table",
    responses(
        (status = 200, description = "All tables", body = Vec<Table>)
    ),
    tag = "Tables"
)]
pub async fn list_tables(State(state): State<AppState>) -> AppResult<Json<Vec<Table>>> {
    let resp = table_service::list_tables(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/table/{table_id}",
    params(
        ("table_id" = String, Path, description = "Table id")
    ),
    responses(
        (status = 200, description = "Table", body = Table),
        (status = 404, description = "Table not found", body = ErrorBody)
    ),
    tag = "Tables"
)]
pub async fn get_table(
    State(state): State<AppState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<Table>> {
    let resp = table_service::get_table(&state, &table_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/table",
    request_body = CreateTableRequest,
    responses(
        (status = 200, description = "Table created", body = InsertAck),
        (status = 400, description = "Invalid body", body = ErrorBody)
    ),
    tag = "Tables"
)]
pub async fn create_table(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTableRequest>,
) -> AppResult<Json<InsertAck>> {
    let resp = table_service::create_table(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/table/{table_id}",
    params(
        ("table_id" = String, Path, description = "Table id")
    ),
    request_body = UpdateTableRequest,
    responses(
        (status = 200, description = "Table updated, or inserted when the id is unknown", body = UpdateAck),
        (status = 400, description = "Invalid body", body = ErrorBody)
    ),
    tag = "Tables"
)]
pub async fn update_table(
    State(state): State<AppState>,
    Path(table_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateTableRequest>,
) -> AppResult<Json<UpdateAck>> {
    let resp = table_service::upsert_table(&state, &table_id, payload).await?;
    Ok(Json(resp))
}
