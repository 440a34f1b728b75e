use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx_migrator::{Migrate, Plan};
use std::path::Path;
use std::str::FromStr;

pub async fn migrate(config: &crate::Config) -> anyhow::Result<()> {
    let options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    let mut conn = pool.acquire().await?;

    shiftboard_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    drop(conn);
    pool.close().await;

    tracing::info!("Database migrated");

    Ok(())
}

/// Drop the database file and recreate it from scratch.
pub async fn reset(config: &crate::Config) -> anyhow::Result<()> {
    let path = config.database.url.trim_start_matches("sqlite:");
    if Path::new(path).exists() {
        std::fs::remove_file(path)?;
        tracing::info!(path, "dropped database");
    }

    migrate(config).await
}
