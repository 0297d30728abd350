//! Persistence and menu-authorization services.
//!
//! - [`models`] -- row structs and DTOs
//! - [`repositories`] -- sqlx queries, one zero-sized repo per table
//! - [`store`] -- the storage seam ([`store::MenuStore`], [`store::IdentityStore`])
//!   with a PostgreSQL and an in-process implementation
//! - [`navigation`] -- permission resolution, tree assembly, active marking,
//!   filtered paging, and menu administration on top of a store

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod navigation;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Default pool size when `DB_MAX_CONNECTIONS` is not set.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
///
/// The pool size is read from `DB_MAX_CONNECTIONS` (default 20).
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let max_connections = std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
