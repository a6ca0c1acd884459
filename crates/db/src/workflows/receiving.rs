//! Receiving workflow: a pending receipt only reaches stock once approved.

use gudang_core::error::CoreError;
use gudang_core::receiving::{ApprovalStatus, Decision};
use gudang_core::stock::{self, StockDirection};
use gudang_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use super::{ledger, WorkflowResult};
use crate::models::receiving::{CreateReceiving, Receiving, ReceivingDetail};
use crate::repositories::{ItemRepo, ReceivingRepo};
use crate::transaction::with_transaction;

/// Record a supplier delivery as `pending`. Stock is not touched.
pub async fn create_receiving(
    pool: &PgPool,
    input: CreateReceiving,
    actor: DbId,
) -> WorkflowResult<ReceivingDetail> {
    stock::ensure_positive_qty(input.qty)?;

    let receiving =
        with_transaction(pool, move |conn| Box::pin(insert_pending(conn, input, actor)))
            .await?;

    tracing::info!(
        receiving_id = receiving.id,
        item_id = receiving.item_id,
        qty = receiving.qty,
        user_id = actor,
        "Receiving created, pending approval"
    );

    load_detail(pool, receiving.id).await
}

/// Approve or reject a pending receiving. Approval credits the quantity to
/// the item in the same transaction; rejection leaves stock alone.
///
/// A receiving that is no longer pending fails with `AlreadyResolved`.
pub async fn resolve_receiving(
    pool: &PgPool,
    receiving_id: DbId,
    decision: Decision,
    approver: DbId,
) -> WorkflowResult<ReceivingDetail> {
    let receiving = with_transaction(pool, move |conn| {
        Box::pin(resolve_and_credit(conn, receiving_id, decision, approver))
    })
    .await?;

    tracing::info!(
        receiving_id,
        item_id = receiving.item_id,
        qty = receiving.qty,
        decision = decision.as_str(),
        user_id = approver,
        "Receiving resolved"
    );

    load_detail(pool, receiving_id).await
}

async fn insert_pending(
    conn: &mut PgConnection,
    input: CreateReceiving,
    actor: DbId,
) -> WorkflowResult<Receiving> {
    ItemRepo::find_for_update(conn, input.item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: input.item_id,
        })?;
    Ok(ReceivingRepo::insert(conn, &input, actor).await?)
}

async fn resolve_and_credit(
    conn: &mut PgConnection,
    receiving_id: DbId,
    decision: Decision,
    approver: DbId,
) -> WorkflowResult<Receiving> {
    let current = ReceivingRepo::find_for_update(conn, receiving_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Receiving",
            id: receiving_id,
        })?;
    current
        .status_approval
        .parse::<ApprovalStatus>()?
        .ensure_resolvable()?;

    let resolved = ReceivingRepo::resolve(conn, receiving_id, decision.status(), approver)
        .await?
        .ok_or_else(|| CoreError::AlreadyResolved {
            status: current.status_approval.clone(),
        })?;

    if let Some(credit) = decision.stock_credit(resolved.qty) {
        ledger::adjust_stock(conn, resolved.item_id, credit, StockDirection::Add).await?;
    }
    Ok(resolved)
}

async fn load_detail(pool: &PgPool, receiving_id: DbId) -> WorkflowResult<ReceivingDetail> {
    ReceivingRepo::find_by_id(pool, receiving_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Receiving",
                id: receiving_id,
            }
            .into()
        })
}
