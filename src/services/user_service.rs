use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    dto::auth::UserList,
    entity::users::{Column, Entity as Users},
    error::{AppError, AppResult},
    models::UserView,
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_users(state: &AppState, query: &Pagination) -> AppResult<UserList> {
    let window = query.normalize();
    let total_count = Users::find().count(&state.orm).await?;
    if window.len_of(total_count) == 0 {
        return Ok(UserList {
            total_count,
            user_items: Vec::new(),
        });
    }

    let user_items = Users::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::UserId)
        .offset(window.start)
        .limit(window.limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(UserList {
        total_count,
        user_items,
    })
}

pub async fn get_user(state: &AppState, user_id: &str) -> AppResult<UserView> {
    Users::find()
        .filter(Column::UserId.eq(user_id))
        .one(&state.orm)
        .await?
        .map(UserView::from)
        .ok_or(AppError::NotFound("user"))
}
