use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::food::{CreateFoodRequest, FoodList, UpdateFoodRequest},
    entity::{
        public_id,
        food::{ActiveModel, Column, Entity as Foods},
    },
    error::{AppError, AppResult},
    models::Food,
    pricing::round_price,
    response::{InsertAck, UpdateAck},
    routes::params::Pagination,
    services::lookup,
    state::AppState,
};

pub async fn list_food(state: &AppState, query: &Pagination) -> AppResult<FoodList> {
    let window = query.normalize();
    let total_count = Foods::find().count(&state.orm).await?;
    if window.len_of(total_count) == 0 {
        return Ok(FoodList {
            total_count,
            food_items: Vec::new(),
        });
    }

    let food_items = Foods::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::FoodId)
        .offset(window.start)
        .limit(window.limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Food::from)
        .collect();

    Ok(FoodList {
        total_count,
        food_items,
    })
}

pub async fn get_food(state: &AppState, food_id: &str) -> AppResult<Food> {
    Foods::find()
        .filter(Column::FoodId.eq(food_id))
        .one(&state.orm)
        .await?
        .map(Food::from)
        .ok_or(AppError::NotFound("food"))
}

pub async fn create_food(state: &AppState, payload: CreateFoodRequest) -> AppResult<InsertAck> {
    lookup::ensure_menu(&state.orm, &payload.menu_id).await?;

    let now = Utc::now();
    let id = Uuid::new_v4();
    let food_id = public_id(id);
    ActiveModel {
        id: Set(id),
        food_id: Set(food_id.clone()),
        name: Set(Some(payload.name)),
        price: Set(Some(round_price(payload.price))),
        food_image: Set(Some(payload.food_image)),
        menu_id: Set(Some(payload.menu_id)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(food_id = %food_id, "food created");
    Ok(InsertAck::new(food_id))
}

/// Update the provided fields, or insert the food under `food_id` if it is unknown.
pub async fn upsert_food(
    state: &AppState,
    food_id: &str,
    payload: UpdateFoodRequest,
) -> AppResult<UpdateAck> {
    if let Some(menu_id) = payload.menu_id.as_deref() {
        lookup::ensure_menu(&state.orm, menu_id).await?;
    }

    let now = Utc::now();
    let existing = Foods::find()
        .filter(Column::FoodId.eq(food_id))
        .one(&state.orm)
        .await?;
    let found = existing.is_some();
    let mut active: ActiveModel = match existing {
        Some(model) => model.into(),
        None => ActiveModel {
            id: Set(Uuid::new_v4()),
            food_id: Set(food_id.to_owned()),
            created_at: Set(now.into()),
            ..Default::default()
        },
    };

    if let Some(name) = payload.name {
        active.name = Set(Some(name));
    }
    if let Some(price) = payload.price {
        active.price = Set(Some(round_price(price)));
    }
    if let Some(food_image) = payload.food_image {
        active.food_image = Set(Some(food_image));
    }
    if let Some(menu_id) = payload.menu_id {
        active.menu_id = Set(Some(menu_id));
    }
    active.updated_at = Set(now.into());

    if found {
        active.update(&state.orm).await?;
        tracing::debug!(food_id, "food updated");
        Ok(UpdateAck::modified())
    } else {
        active.insert(&state.orm).await?;
        tracing::info!(food_id, "food upserted");
        Ok(UpdateAck::upserted(food_id))
    }
}
