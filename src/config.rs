use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub store_timeout: Duration,
    pub db_max_connections: u32,
    pub access_token_ttl: chrono::Duration,
    pub refresh_token_ttl: chrono::Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("APP_PORT").unwrap_or(3000);
        let store_timeout = Duration::from_secs(parse_var("STORE_TIMEOUT_SECS").unwrap_or(100));
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS").unwrap_or(10);
        let access_token_ttl =
            chrono::Duration::minutes(parse_var("ACCESS_TOKEN_TTL_MINUTES").unwrap_or(60));
        let refresh_token_ttl =
            chrono::Duration::hours(parse_var("REFRESH_TOKEN_TTL_HOURS").unwrap_or(24));

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            store_timeout,
            db_max_connections,
            access_token_ttl,
            refresh_token_ttl,
        })
    }

    /// Settings for in-process use (tests, tooling) where no environment is loaded.
    pub fn for_database(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: jwt_secret.into(),
            store_timeout: Duration::from_secs(100),
            db_max_connections: 1,
            access_token_ttl: chrono::Duration::hours(1),
            refresh_token_ttl: chrono::Duration::hours(24),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}
