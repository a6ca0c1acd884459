//! PostgreSQL persistence for the Gudang inventory service.
//!
//! - [`models`] -- row structs and request DTOs.
//! - [`repositories`] -- zero-sized repositories with plain queries.
//! - [`transaction`] -- the [`with_transaction`] scope helper.
//! - [`workflows`] -- item ledger, borrowing and receiving operations that
//!   pair a record write with a stock mutation.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod transaction;
pub mod workflows;

pub use transaction::with_transaction;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
