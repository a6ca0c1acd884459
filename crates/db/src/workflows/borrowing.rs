//! Borrowing workflow: borrowing debits stock, returning credits it back.

use gudang_core::borrowing::{validate_return_date, BorrowingStatus};
use gudang_core::error::CoreError;
use gudang_core::stock::{self, StockDirection};
use gudang_core::types::{BusinessDate, DbId};
use sqlx::{PgConnection, PgPool};

use super::{ledger, WorkflowResult};
use crate::models::borrowing::{Borrowing, BorrowingDetail, CreateBorrowing};
use crate::repositories::{BorrowingRepo, ItemRepo};
use crate::transaction::with_transaction;

/// Record a borrowing and debit its quantity from the item.
///
/// The insert and the debit share one transaction; if either fails neither
/// is committed.
pub async fn create_borrowing(
    pool: &PgPool,
    input: CreateBorrowing,
    actor: DbId,
) -> WorkflowResult<BorrowingDetail> {
    stock::ensure_positive_qty(input.qty)?;

    let borrowing =
        with_transaction(pool, move |conn| Box::pin(insert_and_debit(conn, input, actor)))
            .await?;

    tracing::info!(
        borrowing_id = borrowing.id,
        item_id = borrowing.item_id,
        qty = borrowing.qty,
        user_id = actor,
        "Borrowing created"
    );

    load_detail(pool, borrowing.id).await
}

/// Mark a borrowing returned and credit its full quantity back to the item.
///
/// A second return fails with `AlreadyReturned` and leaves stock untouched.
pub async fn return_borrowing(
    pool: &PgPool,
    borrowing_id: DbId,
    tanggal_kembali: Option<BusinessDate>,
) -> WorkflowResult<BorrowingDetail> {
    let borrowing = with_transaction(pool, move |conn| {
        Box::pin(mark_returned_and_credit(conn, borrowing_id, tanggal_kembali))
    })
    .await?;

    tracing::info!(
        borrowing_id,
        item_id = borrowing.item_id,
        qty = borrowing.qty,
        "Borrowing returned"
    );

    load_detail(pool, borrowing_id).await
}

async fn insert_and_debit(
    conn: &mut PgConnection,
    input: CreateBorrowing,
    actor: DbId,
) -> WorkflowResult<Borrowing> {
    let item = ItemRepo::find_for_update(conn, input.item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Item",
            id: input.item_id,
        })?;
    stock::ensure_available(item.stok_current, input.qty, &item.satuan)?;

    let borrowing = BorrowingRepo::insert(conn, &input, actor).await?;
    ledger::adjust_stock(conn, item.id, input.qty, StockDirection::Subtract).await?;
    Ok(borrowing)
}

async fn mark_returned_and_credit(
    conn: &mut PgConnection,
    borrowing_id: DbId,
    tanggal_kembali: Option<BusinessDate>,
) -> WorkflowResult<Borrowing> {
    let borrowing = BorrowingRepo::find_for_update(conn, borrowing_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Borrowing",
            id: borrowing_id,
        })?;
    borrowing.status.parse::<BorrowingStatus>()?.ensure_returnable()?;
    let returned_on = validate_return_date(borrowing.tanggal_pinjam, tanggal_kembali)?;

    let returned = BorrowingRepo::mark_returned(conn, borrowing_id, returned_on)
        .await?
        .ok_or(CoreError::AlreadyReturned)?;
    ledger::adjust_stock(conn, returned.item_id, returned.qty, StockDirection::Add).await?;
    Ok(returned)
}

async fn load_detail(pool: &PgPool, borrowing_id: DbId) -> WorkflowResult<BorrowingDetail> {
    BorrowingRepo::find_by_id(pool, borrowing_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Borrowing",
                id: borrowing_id,
            }
            .into()
        })
}
