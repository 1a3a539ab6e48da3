use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, services::token_service::TokenService};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            orm,
            tokens: TokenService::new(config),
        }
    }
}
