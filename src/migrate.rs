//! Database migration utilities

use recipebook::Config;
use sqlx::migrate::MigrateDatabase;
use sqlx_migrator::{Migrate, Plan};

/// Create the database if needed and apply every pending migration
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Migrating database {}", config.database.url);

    let pool = recipebook::db::create_pool(&config.database).await?;
    let mut conn = pool.acquire().await?;

    recipebook_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    drop(conn);
    pool.close().await;

    tracing::info!("Migrations applied");

    Ok(())
}

/// Drop the database and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Dropping database {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    }

    migrate(config).await
}
