#![allow(dead_code)]

use std::time::Duration;

use restaurant_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        food::CreateFoodRequest, menus::CreateMenuRequest, order_items::OrderItemInput,
        tables::CreateTableRequest,
    },
    services::{food_service, menu_service, table_service},
    state::AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fresh state over a private in-memory SQLite database with the schema applied.
pub async fn setup() -> anyhow::Result<(AppState, AppConfig)> {
    let config = AppConfig::for_database("sqlite::memory:", TEST_SECRET);
    let orm = create_orm_conn(&config.database_url, 1, Duration::from_secs(5)).await?;
    run_migrations(&orm).await?;
    let state = AppState::new(orm, &config);
    Ok((state, config))
}

pub async fn menu(state: &AppState) -> anyhow::Result<String> {
    let ack = menu_service::create_menu(
        state,
        CreateMenuRequest {
            name: "Lunch".into(),
            category: "Midday".into(),
            start_date: None,
            end_date: None,
        },
    )
    .await?;
    Ok(ack.inserted_id)
}

pub async fn food(state: &AppState, menu_id: &str, name: &str, price: f64) -> anyhow::Result<String> {
    let ack = food_service::create_food(
        state,
        CreateFoodRequest {
            name: name.into(),
            price,
            food_image: format!("https://img.example.com/{name}.png"),
            menu_id: menu_id.into(),
        },
    )
    .await?;
    Ok(ack.inserted_id)
}

pub async fn table(state: &AppState, table_number: i32) -> anyhow::Result<String> {
    let ack = table_service::create_table(
        state,
        CreateTableRequest {
            number_of_guests: 4,
            table_number,
        },
    )
    .await?;
    Ok(ack.inserted_id)
}

pub fn line(food_id: &str, quantity: i32, unit_price: f64) -> OrderItemInput {
    OrderItemInput {
        food_id: food_id.into(),
        quantity,
        unit_price,
    }
}
