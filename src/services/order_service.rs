use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    entity::{
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
        public_id,
    },
    error::{AppError, AppResult},
    models::Order,
    response::{InsertAck, UpdateAck},
    services::lookup,
    state::AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .order_by_asc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();
    Ok(orders)
}

pub async fn get_order(state: &AppState, order_id: &str) -> AppResult<Order> {
    Orders::find()
        .filter(OrderCol::OrderId.eq(order_id))
        .one(&state.orm)
        .await?
        .map(Order::from)
        .ok_or(AppError::NotFound("order"))
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<InsertAck> {
    lookup::ensure_table(&state.orm, &payload.table_id).await?;
    let order_id = insert_order(&state.orm, &payload.table_id, payload.order_date).await?;
    Ok(InsertAck::new(order_id))
}

/// Persist a new order for `table_id` and return its generated id.
///
/// Shared by the order endpoint and the order-item batch, which opens a
/// fresh order for every batch it receives.
pub(crate) async fn insert_order<C: ConnectionTrait>(
    db: &C,
    table_id: &str,
    order_date: DateTime<Utc>,
) -> AppResult<String> {
    let now = Utc::now();
    let id = Uuid::new_v4();
    let order_id = public_id(id);
    OrderActive {
        id: Set(id),
        order_id: Set(order_id.clone()),
        order_date: Set(Some(order_date.into())),
        table_id: Set(Some(table_id.to_owned())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(db)
    .await?;

    tracing::info!(order_id = %order_id, table_id, "order created");
    Ok(order_id)
}

pub async fn upsert_order(
    state: &AppState,
    order_id: &str,
    payload: UpdateOrderRequest,
) -> AppResult<UpdateAck> {
    if let Some(table_id) = payload.table_id.as_deref() {
        lookup::ensure_table(&state.orm, table_id).await?;
    }

    let now = Utc::now();
    let existing = Orders::find()
        .filter(OrderCol::OrderId.eq(order_id))
        .one(&state.orm)
        .await?;
    let found = existing.is_some();
    let mut active: OrderActive = match existing {
        Some(model) => model.into(),
        None => OrderActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order_id.to_owned()),
            created_at: Set(now.into()),
            ..Default::default()
        },
    };

    if let Some(order_date) = payload.order_date {
        active.order_date = Set(Some(order_date.into()));
    }
    if let Some(table_id) = payload.table_id {
        active.table_id = Set(Some(table_id));
    }
    active.updated_at = Set(now.into());

    if found {
        active.update(&state.orm).await?;
        tracing::debug!(order_id, "order updated");
        Ok(UpdateAck::modified())
    } else {
        active.insert(&state.orm).await?;
        tracing::info!(order_id, "order upserted");
        Ok(UpdateAck::upserted(order_id))
    }
}
