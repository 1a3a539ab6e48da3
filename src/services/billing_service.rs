//! Per-order bill: order items joined with their food, order and table.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, sea_query::Expr,
};

use crate::{
    dto::order_items::BillSummary,
    entity::{Food, OrderItems, Orders, Tables, food, order_items, orders, tables},
    error::AppResult,
    pricing::round_price,
};

#[derive(Debug, FromQueryResult)]
struct BillRow {
    order_id: Option<String>,
    table_id: Option<String>,
    table_number: Option<i32>,
    payment_due: Option<f64>,
    total_count: i64,
    order_items: i64,
}

/// Build the bill for one order.
///
/// Every join is a LEFT JOIN: a line whose food, order or table is gone
/// still counts, it just contributes no amount or table number. The amount
/// of a line is the current price of its food. Store errors abort the whole
/// aggregate.
pub async fn items_by_order<C: ConnectionTrait>(
    db: &C,
    order_id: &str,
) -> AppResult<Vec<BillSummary>> {
    let rows = OrderItems::find()
        .select_only()
        .column_as(orders::Column::OrderId, "order_id")
        .column_as(tables::Column::TableId, "table_id")
        .column_as(tables::Column::TableNumber, "table_number")
        .expr_as(Expr::col((Food, food::Column::Price)).sum(), "payment_due")
        .expr_as(Expr::col((OrderItems, order_items::Column::Id)).count(), "total_count")
        .expr_as(Expr::col((OrderItems, order_items::Column::Id)).count(), "order_items")
        .join(JoinType::LeftJoin, item_to_food())
        .join(JoinType::LeftJoin, item_to_order())
        .join(JoinType::LeftJoin, order_to_table())
        .filter(order_items::Column::OrderId.eq(order_id))
        .group_by(orders::Column::OrderId)
        .group_by(tables::Column::TableId)
        .group_by(tables::Column::TableNumber)
        .into_model::<BillRow>()
        .all(db)
        .await?;

    let bills = rows
        .into_iter()
        .map(|row| {
            tracing::debug!(
                order_id = row.order_id.as_deref().unwrap_or("-"),
                table_id = row.table_id.as_deref().unwrap_or("-"),
                lines = row.order_items,
                "bill aggregated"
            );
            BillSummary {
                payment_due: round_price(row.payment_due.unwrap_or(0.0)),
                total_count: row.total_count,
                table_number: row.table_number,
                order_items: row.order_items,
            }
        })
        .collect();

    Ok(bills)
}

fn item_to_food() -> sea_orm::RelationDef {
    OrderItems::belongs_to(Food)
        .from(order_items::Column::FoodId)
        .to(food::Column::FoodId)
        .into()
}

fn item_to_order() -> sea_orm::RelationDef {
    OrderItems::belongs_to(Orders)
        .from(order_items::Column::OrderId)
        .to(orders::Column::OrderId)
        .into()
}

fn order_to_table() -> sea_orm::RelationDef {
    Orders::belongs_to(Tables)
        .from(orders::Column::TableId)
        .to(tables::Column::TableId)
        .into()
}
