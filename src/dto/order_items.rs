use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One line of a batch; validated only after the parent order exists.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemInput {
    #[validate(length(min = 1))]
    pub food_id: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OrderItemBatchRequest {
    #[validate(length(min = 1))]
    pub table_id: String,
    #[validate(length(min = 1))]
    pub order_items: Vec<OrderItemInput>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderItemRequest {
    #[validate(length(min = 1))]
    pub food_id: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,
}

/// Per-order bill produced by the billing aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BillSummary {
    pub payment_due: f64,
    pub total_count: i64,
    pub table_number: Option<i32>,
    pub order_items: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_needs_at_least_one_line() {
        let empty = OrderItemBatchRequest {
            table_id: "t1".into(),
            order_items: Vec::new(),
        };
        assert!(empty.validate().is_err());

        let one = OrderItemBatchRequest {
            table_id: "t1".into(),
            order_items: vec![OrderItemInput {
                food_id: "f1".into(),
                quantity: 1,
                unit_price: 2.5,
            }],
        };
        assert!(one.validate().is_ok());
    }
}
