//! Database pool construction and embedded migrations

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// Embedded migrations from the `migrations/` directory
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Create a connection pool from the database configuration
pub async fn create_pool(config: &DatabaseConfig, url: &str) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Apply any pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to run migrations: {}", e)))
}
