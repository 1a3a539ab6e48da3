use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::tables::{CreateTableRequest, UpdateTableRequest},
    entity::{
        public_id,
        tables::{ActiveModel, Column, Entity as Tables},
    },
    error::{AppError, AppResult},
    models::Table,
    response::{InsertAck, UpdateAck},
    state::AppState,
};

pub async fn list_tables(state: &AppState) -> AppResult<Vec<Table>> {
    let tables = Tables::find()
        .order_by_asc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Table::from)
        .collect();
    Ok(tables)
}

pub async fn get_table(state: &AppState, table_id: &str) -> AppResult<Table> {
    Tables::find()
        .filter(Column::TableId.eq(table_id))
        .one(&state.orm)
        .await?
        .map(Table::from)
        .ok_or(AppError::NotFound("table"))
}

pub async fn create_table(state: &AppState, payload: CreateTableRequest) -> AppResult<InsertAck> {
    let now = Utc::now();
    let id = Uuid::new_v4();
    let table_id = public_id(id);
    ActiveModel {
        id: Set(id),
        table_id: Set(table_id.clone()),
        table_number: Set(Some(payload.table_number)),
        number_of_guests: Set(Some(payload.number_of_guests)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(table_id = %table_id, "table created");
    Ok(InsertAck::new(table_id))
}

pub async fn upsert_table(
    state: &AppState,
    table_id: &str,
    payload: UpdateTableRequest,
) -> AppResult<UpdateAck> {
    let now = Utc::now();
    let existing = Tables::find()
        .filter(Column::TableId.eq(table_id))
        .one(&state.orm)
        .await?;
    let found = existing.is_some();
    let mut active: ActiveModel = match existing {
        Some(model) => model.into(),
        None => ActiveModel {
            id: Set(Uuid::new_v4()),
            table_id: Set(table_id.to_owned()),
            created_at: Set(now.into()),
            ..Default::default()
        },
    };

    if let Some(guests) = payload.number_of_guests {
        active.number_of_guests = Set(Some(guests));
    }
    if let Some(number) = payload.table_number {
        active.table_number = Set(Some(number));
    }
    active.updated_at = Set(now.into());

    if found {
        active.update(&state.orm).await?;
        tracing::debug!(table_id, "table updated");
        Ok(UpdateAck::modified())
    } else {
        active.insert(&state.orm).await?;
        tracing::info!(table_id, "table upserted");
        Ok(UpdateAck::upserted(table_id))
    }
}
