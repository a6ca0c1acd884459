//! Receiving workflow: pending receipts only reach stock on approval.

mod common;

use assert_matches::assert_matches;
use common::{create_item, create_user, date, stock_of};
use gudang_core::error::CoreError;
use gudang_core::receiving::{Decision, APPROVAL_APPROVED, APPROVAL_PENDING, APPROVAL_REJECTED};
use gudang_core::types::DbId;
use gudang_db::models::receiving::CreateReceiving;
use gudang_db::repositories::ReceivingRepo;
use gudang_db::workflows::receiving::{create_receiving, resolve_receiving};
use gudang_db::workflows::WorkflowError;
use sqlx::PgPool;

fn delivery(item_id: DbId, qty: i32) -> CreateReceiving {
    CreateReceiving {
        item_id,
        supplier: "PT Sumber Makmur".to_string(),
        qty,
        tanggal_terima: date(2026, 3, 10),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creating_a_receiving_leaves_stock_alone(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let item = create_item(&pool, "Semen 50kg", 4, 10).await;

    let receiving = create_receiving(&pool, delivery(item.id, 20), admin)
        .await
        .unwrap();

    assert_eq!(receiving.status_approval, APPROVAL_PENDING);
    assert!(receiving.approved_by.is_none());
    assert!(receiving.approved_at.is_none());
    assert_eq!(receiving.created_by_username, "admin1");
    assert_eq!(stock_of(&pool, item.id).await, 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn receiving_for_unknown_item_is_not_found(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let result = create_receiving(&pool, delivery(31337, 5), admin).await;
    assert_matches!(
        result,
        Err(WorkflowError::Core(CoreError::NotFound { entity: "Item", .. }))
    );
}

/// Receiving(20): stock unchanged -> approve -> +20 -> second resolve fails.
#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_credits_exactly_once(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let boss = create_user(&pool, "boss", "super_admin").await;
    let item = create_item(&pool, "Pasir", 4, 10).await;

    let receiving = create_receiving(&pool, delivery(item.id, 20), admin)
        .await
        .unwrap();
    assert_eq!(stock_of(&pool, item.id).await, 4);

    let approved = resolve_receiving(&pool, receiving.id, Decision::Approved, boss)
        .await
        .unwrap();
    assert_eq!(approved.status_approval, APPROVAL_APPROVED);
    assert_eq!(approved.approved_by, Some(boss));
    assert_eq!(approved.approved_by_username.as_deref(), Some("boss"));
    assert!(approved.approved_at.is_some());
    assert_eq!(stock_of(&pool, item.id).await, 24);

    for decision in [Decision::Approved, Decision::Rejected] {
        let again = resolve_receiving(&pool, receiving.id, decision, boss).await;
        assert_matches!(
            again,
            Err(WorkflowError::Core(CoreError::AlreadyResolved { ref status })) if status == "approved"
        );
    }
    assert_eq!(stock_of(&pool, item.id).await, 24);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_never_changes_stock(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let boss = create_user(&pool, "boss", "super_admin").await;
    let item = create_item(&pool, "Besi Beton", 12, 3).await;

    let receiving = create_receiving(&pool, delivery(item.id, 30), admin)
        .await
        .unwrap();
    let rejected = resolve_receiving(&pool, receiving.id, Decision::Rejected, boss)
        .await
        .unwrap();

    assert_eq!(rejected.status_approval, APPROVAL_REJECTED);
    assert_eq!(rejected.approved_by, Some(boss));
    assert_eq!(stock_of(&pool, item.id).await, 12);

    let again = resolve_receiving(&pool, receiving.id, Decision::Approved, boss).await;
    assert_matches!(
        again,
        Err(WorkflowError::Core(CoreError::AlreadyResolved { .. }))
    );
    assert_eq!(stock_of(&pool, item.id).await, 12);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approval_overflowing_stock_rolls_back_and_stays_pending(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let boss = create_user(&pool, "boss", "super_admin").await;
    let item = create_item(&pool, "Baut M8", 2_000_000_000, 10).await;

    let receiving = create_receiving(&pool, delivery(item.id, 2_000_000_000), admin)
        .await
        .unwrap();
    let result = resolve_receiving(&pool, receiving.id, Decision::Approved, boss).await;

    assert_matches!(
        result,
        Err(WorkflowError::Core(CoreError::Validation(ref msg))) if msg == "Stock level overflow"
    );
    assert_eq!(stock_of(&pool, item.id).await, 2_000_000_000);
    let still_pending = ReceivingRepo::find_by_id(&pool, receiving.id)
        .await
        .unwrap()
        .expect("receiving should exist");
    assert_eq!(still_pending.status_approval, APPROVAL_PENDING);
    assert!(still_pending.approved_by.is_none());

    // Rejecting is still possible since nothing was resolved.
    let rejected = resolve_receiving(&pool, receiving.id, Decision::Rejected, boss)
        .await
        .unwrap();
    assert_eq!(rejected.status_approval, APPROVAL_REJECTED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolving_unknown_receiving_is_not_found(pool: PgPool) {
    let boss = create_user(&pool, "boss", "super_admin").await;
    let result = resolve_receiving(&pool, 55, Decision::Approved, boss).await;
    assert_matches!(
        result,
        Err(WorkflowError::Core(CoreError::NotFound { entity: "Receiving", id: 55 }))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_approvals_credit_once(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let boss = create_user(&pool, "boss", "super_admin").await;
    let item = create_item(&pool, "Keramik", 0, 0).await;
    let receiving = create_receiving(&pool, delivery(item.id, 20), admin)
        .await
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = pool.clone();
            let id = receiving.id;
            tokio::spawn(async move { resolve_receiving(&pool, id, Decision::Approved, boss).await })
        })
        .collect();
    let mut succeeded = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(stock_of(&pool, item.id).await, 20);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pending_and_date_range_reports(pool: PgPool) {
    let admin = create_user(&pool, "admin1", "admin").await;
    let boss = create_user(&pool, "boss", "super_admin").await;
    let item = create_item(&pool, "Pipa PVC", 10, 2).await;

    let mut march = delivery(item.id, 5);
    march.tanggal_terima = date(2026, 3, 3);
    let mut april = delivery(item.id, 6);
    april.tanggal_terima = date(2026, 4, 3);

    let march = create_receiving(&pool, march, admin).await.unwrap();
    let april = create_receiving(&pool, april, admin).await.unwrap();
    resolve_receiving(&pool, march.id, Decision::Approved, boss)
        .await
        .unwrap();

    let pending = ReceivingRepo::list_pending(&pool).await.unwrap();
    assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![april.id]);

    let in_march = ReceivingRepo::list_by_date_range(&pool, date(2026, 3, 1), date(2026, 3, 31))
        .await
        .unwrap();
    assert_eq!(in_march.len(), 1);
    assert_eq!(in_march[0].id, march.id);
    assert_eq!(in_march[0].status_approval, APPROVAL_APPROVED);
}
