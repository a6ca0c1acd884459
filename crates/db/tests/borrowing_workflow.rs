//! Borrowing workflow: debit on borrow, credit on return, one-shot return.

mod common;

use assert_matches::assert_matches;
use common::{create_item, create_user, date, stock_of};
use gudang_core::borrowing::{STATUS_BORROWED, STATUS_RETURNED};
use gudang_core::error::CoreError;
use gudang_core::types::DbId;
use gudang_db::models::borrowing::CreateBorrowing;
use gudang_db::repositories::BorrowingRepo;
use gudang_db::workflows::borrowing::{create_borrowing, return_borrowing};
use gudang_db::workflows::WorkflowError;
use sqlx::PgPool;

fn borrow(item_id: DbId, qty: i32) -> CreateBorrowing {
    CreateBorrowing {
        item_id,
        nama_proyek: "Renovasi Gedung A".to_string(),
        peminjam: "Budi".to_string(),
        qty,
        tanggal_pinjam: date(2026, 3, 1),
        keterangan: None,
    }
}

async fn borrowing_count(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM borrowings")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn borrow_debits_stock_and_records_detail(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Bor Listrik", 10, 2).await;

    let detail = create_borrowing(&pool, borrow(item.id, 4), admin)
        .await
        .unwrap();

    assert_eq!(detail.status, STATUS_BORROWED);
    assert_eq!(detail.qty, 4);
    assert_eq!(detail.nama_barang, "Bor Listrik");
    assert_eq!(detail.satuan, "pcs");
    assert_eq!(detail.created_by_username, "admin1");
    assert!(detail.tanggal_kembali.is_none());
    assert_eq!(stock_of(&pool, item.id).await, 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn borrow_more_than_stock_fails_without_side_effects(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Gerinda", 3, 1).await;

    let result = create_borrowing(&pool, borrow(item.id, 4), admin).await;

    assert_matches!(
        result,
        Err(WorkflowError::Core(CoreError::InsufficientStock { available: 3, ref unit })) if unit == "pcs"
    );
    assert_eq!(stock_of(&pool, item.id).await, 3);
    assert_eq!(borrowing_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn borrow_unknown_item_is_not_found(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let result = create_borrowing(&pool, borrow(4242, 1), admin).await;
    assert_matches!(
        result,
        Err(WorkflowError::Core(CoreError::NotFound { entity: "Item", .. }))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn borrow_then_return_restores_stock(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Tangga Lipat", 7, 1).await;

    let borrowed = create_borrowing(&pool, borrow(item.id, 5), admin)
        .await
        .unwrap();
    let returned = return_borrowing(&pool, borrowed.id, Some(date(2026, 3, 4)))
        .await
        .unwrap();

    assert_eq!(returned.status, STATUS_RETURNED);
    assert_eq!(returned.tanggal_kembali, Some(date(2026, 3, 4)));
    assert_eq!(stock_of(&pool, item.id).await, 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_return_fails_and_stock_unaffected(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Palu", 10, 1).await;
    let borrowed = create_borrowing(&pool, borrow(item.id, 3), admin)
        .await
        .unwrap();
    return_borrowing(&pool, borrowed.id, Some(date(2026, 3, 2)))
        .await
        .unwrap();

    let again = return_borrowing(&pool, borrowed.id, Some(date(2026, 3, 3))).await;

    assert_matches!(again, Err(WorkflowError::Core(CoreError::AlreadyReturned)));
    assert_eq!(stock_of(&pool, item.id).await, 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn return_requires_a_valid_date(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Obeng", 10, 1).await;
    let borrowed = create_borrowing(&pool, borrow(item.id, 2), admin)
        .await
        .unwrap();

    let missing = return_borrowing(&pool, borrowed.id, None).await;
    assert_matches!(missing, Err(WorkflowError::Core(CoreError::Validation(_))));

    let too_early = return_borrowing(&pool, borrowed.id, Some(date(2026, 2, 28))).await;
    assert_matches!(too_early, Err(WorkflowError::Core(CoreError::Validation(_))));

    // Neither attempt moved stock or status.
    assert_eq!(stock_of(&pool, item.id).await, 8);
    let still = BorrowingRepo::find_by_id(&pool, borrowed.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(still.status, STATUS_BORROWED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn return_unknown_borrowing_is_not_found(pool: PgPool) {
    let result = return_borrowing(&pool, 777, Some(date(2026, 3, 1))).await;
    assert_matches!(
        result,
        Err(WorkflowError::Core(CoreError::NotFound { entity: "Borrowing", id: 777 }))
    );
}

/// Item(10, 5): borrow 10 -> 0; borrow 1 fails; return -> 10.
#[sqlx::test(migrations = "../../db/migrations")]
async fn drain_and_restore_scenario(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Mesin Las", 10, 5).await;

    let first = create_borrowing(&pool, borrow(item.id, 10), admin)
        .await
        .unwrap();
    assert_eq!(stock_of(&pool, item.id).await, 0);

    let second = create_borrowing(&pool, borrow(item.id, 1), admin).await;
    assert_matches!(
        second,
        Err(WorkflowError::Core(CoreError::InsufficientStock { available: 0, .. }))
    );

    return_borrowing(&pool, first.id, Some(date(2026, 3, 5)))
        .await
        .unwrap();
    assert_eq!(stock_of(&pool, item.id).await, 10);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn active_and_date_range_reports(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Helm Proyek", 50, 5).await;

    let mut early = borrow(item.id, 1);
    early.tanggal_pinjam = date(2026, 1, 10);
    let mut late = borrow(item.id, 2);
    late.tanggal_pinjam = date(2026, 2, 20);

    let early = create_borrowing(&pool, early, admin).await.unwrap();
    let late = create_borrowing(&pool, late, admin).await.unwrap();
    return_borrowing(&pool, early.id, Some(date(2026, 1, 12)))
        .await
        .unwrap();

    let active = BorrowingRepo::list_active(&pool).await.unwrap();
    assert_eq!(active.iter().map(|b| b.id).collect::<Vec<_>>(), vec![late.id]);

    let january = BorrowingRepo::list_by_date_range(&pool, date(2026, 1, 1), date(2026, 1, 31))
        .await
        .unwrap();
    assert_eq!(january.iter().map(|b| b.id).collect::<Vec<_>>(), vec![early.id]);

    // Bounds are inclusive.
    let edge = BorrowingRepo::list_by_date_range(&pool, date(2026, 2, 20), date(2026, 2, 20))
        .await
        .unwrap();
    assert_eq!(edge.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_borrows_never_oversell(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Scaffolding", 5, 0).await;

    let attempts = (0..8).map(|_| {
        let pool = pool.clone();
        let input = borrow(item.id, 1);
        tokio::spawn(async move { create_borrowing(&pool, input, admin).await })
    });
    let mut succeeded = 0;
    for handle in attempts.collect::<Vec<_>>() {
        if handle.await.unwrap().is_ok() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 5);
    assert_eq!(stock_of(&pool, item.id).await, 0);
    assert_eq!(borrowing_count(&pool).await, 5);
}
