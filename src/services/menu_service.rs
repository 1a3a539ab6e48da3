use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::menus::{CreateMenuRequest, UpdateMenuRequest, in_time_span},
    entity::{
        menus::{ActiveModel, Column, Entity as Menus},
        public_id,
    },
    error::{AppError, AppResult},
    models::Menu,
    response::{InsertAck, UpdateAck},
    state::AppState,
};

pub async fn list_menus(state: &AppState) -> AppResult<Vec<Menu>> {
    let menus = Menus::find()
        .order_by_asc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Menu::from)
        .collect();
    Ok(menus)
}

pub async fn get_menu(state: &AppState, menu_id: &str) -> AppResult<Menu> {
    Menus::find()
        .filter(Column::MenuId.eq(menu_id))
        .one(&state.orm)
        .await?
        .map(Menu::from)
        .ok_or(AppError::NotFound("menu"))
}

pub async fn create_menu(state: &AppState, payload: CreateMenuRequest) -> AppResult<InsertAck> {
    let now = Utc::now();
    let id = Uuid::new_v4();
    let menu_id = public_id(id);
    ActiveModel {
        id: Set(id),
        menu_id: Set(menu_id.clone()),
        name: Set(Some(payload.name)),
        category: Set(Some(payload.category)),
        start_date: Set(payload.start_date.map(Into::into)),
        end_date: Set(payload.end_date.map(Into::into)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(menu_id = %menu_id, "menu created");
    Ok(InsertAck::new(menu_id))
}

pub async fn upsert_menu(
    state: &AppState,
    menu_id: &str,
    payload: UpdateMenuRequest,
) -> AppResult<UpdateAck> {
    let now = Utc::now();
    if let (Some(start), Some(end)) = (payload.start_date, payload.end_date) {
        if !in_time_span(start, end, now) {
            return Err(AppError::BadRequest("kindly retype the time".into()));
        }
    }

    let existing = Menus::find()
        .filter(Column::MenuId.eq(menu_id))
        .one(&state.orm)
        .await?;
    let found = existing.is_some();
    let mut active: ActiveModel = match existing {
        Some(model) => model.into(),
        None => ActiveModel {
            id: Set(Uuid::new_v4()),
            menu_id: Set(menu_id.to_owned()),
            created_at: Set(now.into()),
            ..Default::default()
        },
    };

    if let Some(name) = payload.name {
        active.name = Set(Some(name));
    }
    if let Some(category) = payload.category {
        active.category = Set(Some(category));
    }
    if let Some(start) = payload.start_date {
        active.start_date = Set(Some(start.into()));
    }
    if let Some(end) = payload.end_date {
        active.end_date = Set(Some(end.into()));
    }
    active.updated_at = Set(now.into());

    if found {
        active.update(&state.orm).await?;
        tracing::debug!(menu_id, "menu updated");
        Ok(UpdateAck::modified())
    } else {
        active.insert(&state.orm).await?;
        tracing::info!(menu_id, "menu upserted");
        Ok(UpdateAck::upserted(menu_id))
    }
}
