use chrono::{Duration, Utc};
use restaurant_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{food, menus, public_id, tables, users, Food, Menus, Tables, Users},
    services::auth_service::hash_password,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, 1, config.store_timeout).await?;
    run_migrations(&orm).await?;

    let menu_id = ensure_menu(&orm, "All day", "main").await?;
    seed_food(&orm, &menu_id).await?;
    seed_tables(&orm).await?;
    let admin_id = ensure_user(&orm, "admin@example.com", "+10000000000", "admin123").await?;

    println!("Seed completed. Menu ID: {menu_id}, Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_menu(orm: &DatabaseConnection, name: &str, category: &str) -> anyhow::Result<String> {
    if let Some(menu) = Menus::find()
        .filter(menus::Column::Name.eq(name))
        .one(orm)
        .await?
    {
        return Ok(menu.menu_id);
    }

    let now = Utc::now();
    let id = Uuid::new_v4();
    let menu = menus::ActiveModel {
        id: Set(id),
        menu_id: Set(public_id(id)),
        name: Set(Some(name.to_owned())),
        category: Set(Some(category.to_owned())),
        start_date: Set(Some(now.into())),
        end_date: Set(Some((now + Duration::days(365)).into())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(orm)
    .await?;

    println!("Seeded menu {name}");
    Ok(menu.menu_id)
}

async fn seed_food(orm: &DatabaseConnection, menu_id: &str) -> anyhow::Result<()> {
    let dishes = [
        ("Margherita", 9.5, "https://img.example.com/margherita.png"),
        ("Caesar Salad", 7.25, "https://img.example.com/caesar.png"),
        ("Tiramisu", 5.0, "https://img.example.com/tiramisu.png"),
    ];

    for (name, price, image) in dishes {
        let exists = Food::find()
            .filter(food::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        let now = Utc::now();
        let id = Uuid::new_v4();
        food::ActiveModel {
            id: Set(id),
            food_id: Set(public_id(id)),
            name: Set(Some(name.to_owned())),
            price: Set(Some(price)),
            food_image: Set(Some(image.to_owned())),
            menu_id: Set(Some(menu_id.to_owned())),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded food");
    Ok(())
}

async fn seed_tables(orm: &DatabaseConnection) -> anyhow::Result<()> {
    for (table_number, guests) in [(1, 2), (2, 4), (3, 6)] {
        let exists = Tables::find()
            .filter(tables::Column::TableNumber.eq(table_number))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        let now = Utc::now();
        let id = Uuid::new_v4();
        tables::ActiveModel {
            id: Set(id),
            table_id: Set(public_id(id)),
            table_number: Set(Some(table_number)),
            number_of_guests: Set(Some(guests)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded tables");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    email: &str,
    phone: &str,
    password: &str,
) -> anyhow::Result<String> {
    if let Some(user) = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        return Ok(user.user_id);
    }

    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!("hashing failed: {e}"))?;
    let now = Utc::now();
    let id = Uuid::new_v4();
    let user = users::ActiveModel {
        id: Set(id),
        user_id: Set(public_id(id)),
        first_name: Set("Admin".into()),
        last_name: Set("User".into()),
        email: Set(email.to_owned()),
        phone: Set(phone.to_owned()),
        password_hash: Set(password_hash),
        avatar: Set(None),
        token: Set(None),
        refresh_token: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {email}");
    Ok(user.user_id)
}
