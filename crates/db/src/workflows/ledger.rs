//! Item ledger: the only path by which `stok_current` changes after creation.

use gudang_core::error::CoreError;
use gudang_core::stock::{self, StockDirection};
use gudang_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::WorkflowResult;
use crate::models::item::Item;
use crate::repositories::ItemRepo;
use crate::transaction::with_transaction;

/// Move an item's stock by `qty` in `direction` on the given connection.
///
/// The item row is locked first and the new level computed with
/// [`stock::apply`], so an unknown item is `NotFound`, an oversized
/// subtraction is `InsufficientStock` and an addition past `i32::MAX` is a
/// validation error. Callers inside a workflow pass their transaction's
/// connection so the adjustment commits or rolls back together with the
/// workflow record.
pub async fn adjust_stock(
    conn: &mut PgConnection,
    item_id: DbId,
    qty: i32,
    direction: StockDirection,
) -> WorkflowResult<Item> {
    let current = ItemRepo::find_for_update(conn, item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: item_id,
        })?;
    let expected = stock::apply(current.stok_current, qty, direction, &current.satuan)?;

    // The row is locked, so the guarded update only misses if the lock was lost.
    let item = ItemRepo::adjust_stock(conn, item_id, qty, direction)
        .await?
        .ok_or_else(|| {
            CoreError::Internal(format!("Stock guard rejected adjustment of item {item_id}"))
        })?;
    debug_assert_eq!(item.stok_current, expected);

    tracing::debug!(
        item_id,
        qty,
        direction = direction.as_str(),
        stok_current = item.stok_current,
        "Stock adjusted"
    );
    if stock::is_low_stock(item.stok_current, item.stok_minimal) {
        tracing::warn!(
            item_id,
            stok_current = item.stok_current,
            stok_minimal = item.stok_minimal,
            "Item at or below minimum stock"
        );
    }
    Ok(item)
}

/// Manual stock adjustment (`PUT /items/{id}/stock`) in its own transaction.
pub async fn apply_manual_adjustment(
    pool: &PgPool,
    item_id: DbId,
    qty: i32,
    direction: StockDirection,
) -> WorkflowResult<Item> {
    let item = with_transaction(pool, move |conn| {
        Box::pin(adjust_stock(conn, item_id, qty, direction))
    })
    .await?;

    tracing::info!(
        item_id,
        qty,
        direction = direction.as_str(),
        stok_current = item.stok_current,
        "Manual stock adjustment applied"
    );
    Ok(item)
}
