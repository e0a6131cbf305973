//! Migrate command - applies pending database migrations and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::{db, logging};

/// Apply pending migrations against the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = crate::connect_database(&config).await?;

    info!("Applying pending migrations");
    db::run_migrations(&pool).await?;
    info!("Migrations applied");

    Ok(())
}
