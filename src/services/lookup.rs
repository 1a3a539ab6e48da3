use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    entity::{Food, Menus, Orders, Tables, food, menus, orders, tables},
    error::{AppError, AppResult},
};

async fn exists<E, C>(db: &C, column: E::Column, value: &str) -> AppResult<bool>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let found = E::find().filter(column.eq(value)).one(db).await?;
    Ok(found.is_some())
}

pub async fn ensure_menu<C: ConnectionTrait>(db: &C, menu_id: &str) -> AppResult<()> {
    if !exists::<Menus, _>(db, menus::Column::MenuId, menu_id).await? {
        return Err(AppError::MissingReference("menu"));
    }
    Ok(())
}

pub async fn ensure_table<C: ConnectionTrait>(db: &C, table_id: &str) -> AppResult<()> {
    if !exists::<Tables, _>(db, tables::Column::TableId, table_id).await? {
        return Err(AppError::MissingReference("table"));
    }
    Ok(())
}

pub async fn ensure_order<C: ConnectionTrait>(db: &C, order_id: &str) -> AppResult<()> {
    if !exists::<Orders, _>(db, orders::Column::OrderId, order_id).await? {
        return Err(AppError::MissingReference("order"));
    }
    Ok(())
}

pub async fn ensure_food<C: ConnectionTrait>(db: &C, food_id: &str) -> AppResult<()> {
    if !exists::<Food, _>(db, food::Column::FoodId, food_id).await? {
        return Err(AppError::MissingReference("food"));
    }
    Ok(())
}
