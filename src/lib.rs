//! User Management API
//!
//! A CRUD HTTP service for a single `User` resource backed by PostgreSQL:
//! - Field validation (adult age, 10-digit phone, unique email)
//! - Explicit repository layer over sqlx
//! - Structured logging and config-driven setup

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use api::state::AppState;
use infrastructure::db;
use infrastructure::user::{PostgresUserRepository, UserService};

/// Connect to the configured PostgreSQL database
pub async fn connect_database(config: &AppConfig) -> anyhow::Result<PgPool> {
    let url = config.database_url().ok_or_else(|| {
        anyhow::anyhow!(
            "database URL is not configured (set APP__DATABASE__URL or DATABASE_URL)"
        )
    })?;

    info!("Connecting to PostgreSQL...");
    let pool = db::create_pool(&config.database, &url).await?;
    info!("PostgreSQL connection established");

    Ok(pool)
}

/// Build the application state: database pool, migrations, and the user
/// service wired together
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = connect_database(config).await?;

    db::run_migrations(&pool).await?;

    let repository = Arc::new(PostgresUserRepository::new(pool));
    let user_service: Arc<dyn api::state::UserServiceTrait> =
        Arc::new(UserService::new(repository));

    Ok(AppState { user_service })
}
