use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, SignupRequest, UserList},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::UserView,
    response::InsertAck,
    routes::params::Pagination,
    services::{auth_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users))
        .route("/user/", get(list_users))
        .route("/user/{user_id}", get(get_user))
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
}

#[utoipa::path(
    get,
    path = "/user/",
    params(Pagination),
    responses(
        (status = 200, description = "One page of users", body = UserList)
    ),
    security(()),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<UserList>> {
    let resp = user_service::list_users(&state, &query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/user/{user_id}",
    params(
        ("user_id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User", body = UserView),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(()),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserView>> {
    let resp = user_service::get_user(&state, &user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/user/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = InsertAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 409, description = "Email or phone already exists", body = ErrorBody)
    ),
    security(()),
    tag = "Users"
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Json<InsertAck>> {
    let resp = auth_service::signup(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid email or password", body = ErrorBody)
    ),
    security(()),
    tag = "Users"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth_service::login(&state, payload).await?;
    Ok(Json(resp))
}
