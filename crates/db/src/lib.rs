//! Persistence for SponsorLink.
//!
//! Each collection lives as one JSON block under a fixed key in a
//! [`KeyValueStore`]. Repositories read the whole block, change it in memory
//! and write it back.

use sqlx::sqlite::SqlitePoolOptions;

pub mod collection;
pub mod error;
pub mod repositories;
pub mod store;

pub use error::DbError;
pub use store::{FileStore, KeyValueStore, MemoryStore, SqliteStore};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
