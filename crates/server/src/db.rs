use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::{info, warn};

use travelog_core::config::DatabaseConfig;

/// Create a PostgreSQL connection pool and run migrations.
/// Returns None if DATABASE_URL is not configured or the connection fails.
pub async fn init_pg_pool(config: &DatabaseConfig) -> Option<PgPool> {
    let Some(url) = config.url.as_deref() else {
        warn!("DATABASE_URL not configured — trip endpoints will report the database as unavailable");
        return None;
    };

    let mut options = match PgConnectOptions::from_str(url) {
        Ok(options) => options,
        Err(e) => {
            warn!("Invalid DATABASE_URL: {} — trip endpoints disabled", e);
            return None;
        }
    };
    if let Some(name) = config.name.as_deref() {
        options = options.database(name);
    }

    match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
    {
        Ok(pool) => {
            info!("PostgreSQL connected (database: {})", config.name.as_deref().unwrap_or("from url"));
            match sqlx::migrate!("../../migrations").run(&pool).await {
                Ok(_) => {
                    info!("Database migrations applied successfully");
                    Some(pool)
                }
                Err(e) => {
                    warn!("Failed to run migrations: {} — trip endpoints disabled", e);
                    None
                }
            }
        }
        Err(e) => {
            warn!("Failed to connect to PostgreSQL: {} — trip endpoints disabled", e);
            None
        }
    }
}
