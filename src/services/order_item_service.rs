use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::order_items::{BillSummary, OrderItemBatchRequest, UpdateOrderItemRequest},
    entity::{
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems},
        public_id,
    },
    error::{AppError, AppResult},
    models::OrderItem,
    pricing::round_price,
    response::{InsertManyAck, UpdateAck},
    services::{billing_service, lookup, order_service},
    state::AppState,
};

pub async fn list_order_items(state: &AppState) -> AppResult<Vec<OrderItem>> {
    let items = OrderItems::find()
        .order_by_asc(OrderItemCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();
    Ok(items)
}

pub async fn get_order_item(state: &AppState, order_item_id: &str) -> AppResult<OrderItem> {
    OrderItems::find()
        .filter(OrderItemCol::OrderItemId.eq(order_item_id))
        .one(&state.orm)
        .await?
        .map(OrderItem::from)
        .ok_or(AppError::NotFound("order item"))
}

pub async fn items_by_order(state: &AppState, order_id: &str) -> AppResult<Vec<BillSummary>> {
    billing_service::items_by_order(&state.orm, order_id).await
}

/// Open a new order for the table and attach every line of the batch to it.
///
/// The order is written first. If a line then fails validation the request
/// is rejected and no line is stored, but the order stays behind: the two
/// writes are not one transaction.
pub async fn create_order_items(
    state: &AppState,
    payload: OrderItemBatchRequest,
) -> AppResult<InsertManyAck> {
    let OrderItemBatchRequest {
        table_id,
        order_items,
    } = payload;

    lookup::ensure_table(&state.orm, &table_id).await?;
    let order_id = order_service::insert_order(&state.orm, &table_id, Utc::now()).await?;

    let now = Utc::now();
    let mut pending = Vec::with_capacity(order_items.len());
    let mut inserted_ids = Vec::with_capacity(order_items.len());
    for (index, item) in order_items.into_iter().enumerate() {
        if let Err(errors) = item.validate() {
            tracing::warn!(order_id = %order_id, index, "order item rejected, order kept");
            return Err(AppError::BadRequest(format!("order item {index}: {errors}")));
        }

        let id = Uuid::new_v4();
        let order_item_id = public_id(id);
        pending.push(OrderItemActive {
            id: Set(id),
            order_item_id: Set(order_item_id.clone()),
            order_id: Set(Some(order_id.clone())),
            food_id: Set(Some(item.food_id)),
            quantity: Set(Some(item.quantity)),
            unit_price: Set(Some(round_price(item.unit_price))),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        });
        inserted_ids.push(order_item_id);
    }

    OrderItems::insert_many(pending).exec(&state.orm).await?;

    tracing::info!(order_id = %order_id, lines = inserted_ids.len(), "order items created");
    Ok(InsertManyAck { inserted_ids })
}

pub async fn upsert_order_item(
    state: &AppState,
    order_item_id: &str,
    payload: UpdateOrderItemRequest,
) -> AppResult<UpdateAck> {
    if let Some(food_id) = payload.food_id.as_deref() {
        lookup::ensure_food(&state.orm, food_id).await?;
    }

    let now = Utc::now();
    let existing = OrderItems::find()
        .filter(OrderItemCol::OrderItemId.eq(order_item_id))
        .one(&state.orm)
        .await?;
    let found = existing.is_some();
    let mut active: OrderItemActive = match existing {
        Some(model) => model.into(),
        None => OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_item_id: Set(order_item_id.to_owned()),
            created_at: Set(now.into()),
            ..Default::default()
        },
    };

    if let Some(unit_price) = payload.unit_price {
        active.unit_price = Set(Some(round_price(unit_price)));
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(Some(quantity));
    }
    if let Some(food_id) = payload.food_id {
        active.food_id = Set(Some(food_id));
    }
    active.updated_at = Set(now.into());

    if found {
        active.update(&state.orm).await?;
        tracing::debug!(order_item_id, "order item updated");
        Ok(UpdateAck::modified())
    } else {
        active.insert(&state.orm).await?;
        tracing::info!(order_item_id, "order item upserted");
        Ok(UpdateAck::upserted(order_item_id))
    }
}
