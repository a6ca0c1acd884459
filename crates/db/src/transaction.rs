//! Transaction scope helper.
//!
//! [`with_transaction`] opens a transaction, hands the callback a connection
//! bound to it, and commits only when the callback returns `Ok`. Any `Err`
//! rolls back; so does dropping the future mid-flight, because an
//! uncommitted [`sqlx::Transaction`] rolls back on drop.

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

/// Run `f` inside a single database transaction.
///
/// ```ignore
/// let item = with_transaction(&pool, move |conn| {
///     Box::pin(ledger::adjust_stock(conn, item_id, 5, StockDirection::Add))
/// })
/// .await?;
/// ```
pub async fn with_transaction<T, E, F>(pool: &PgPool, f: F) -> Result<T, E>
where
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>>,
    E: From<sqlx::Error>,
{
    let mut tx = pool.begin().await?;
    let outcome = f(&mut *tx).await;
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}
