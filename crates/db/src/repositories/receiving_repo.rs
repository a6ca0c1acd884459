//! Repository for the `receivings` table.

use gudang_core::receiving::{ApprovalStatus, APPROVAL_PENDING};
use gudang_core::types::{BusinessDate, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::receiving::{CreateReceiving, Receiving, ReceivingDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_id, supplier, qty, tanggal_terima, status_approval, \
     created_by, approved_by, approved_at, created_at, updated_at";

/// Joined projection with item display fields and both usernames.
const DETAIL_SELECT: &str = "SELECT r.id, r.item_id, r.supplier, r.qty, r.tanggal_terima, \
     r.status_approval, r.created_by, r.approved_by, r.approved_at, r.created_at, \
     r.updated_at, \
     i.nama_barang, i.kategori, i.satuan, \
     u1.username AS created_by_username, u2.username AS approved_by_username \
     FROM receivings r \
     JOIN items i ON i.id = r.item_id \
     JOIN users u1 ON u1.id = r.created_by \
     LEFT JOIN users u2 ON u2.id = r.approved_by";

/// Provides inserts, the approval transition, and joined listings.
pub struct ReceivingRepo;

impl ReceivingRepo {
    /// Insert a new receiving in the `pending` state.
    pub async fn insert(
        conn: &mut PgConnection,
        input: &CreateReceiving,
        created_by: DbId,
    ) -> Result<Receiving, sqlx::Error> {
        let query = format!(
            "INSERT INTO receivings (item_id, supplier, qty, tanggal_terima, status_approval, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Receiving>(&query)
            .bind(input.item_id)
            .bind(&input.supplier)
            .bind(input.qty)
            .bind(input.tanggal_terima)
            .bind(APPROVAL_PENDING)
            .bind(created_by)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a receiving and lock its row until the transaction ends.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Receiving>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM receivings WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Receiving>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Record the resolver's decision.
    ///
    /// Only matches rows still `pending`; returns `None` otherwise.
    pub async fn resolve(
        conn: &mut PgConnection,
        id: DbId,
        status: ApprovalStatus,
        approved_by: DbId,
    ) -> Result<Option<Receiving>, sqlx::Error> {
        let query = format!(
            "UPDATE receivings SET status_approval = $2, approved_by = $3, approved_at = NOW()
             WHERE id = $1 AND status_approval = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Receiving>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(approved_by)
            .bind(APPROVAL_PENDING)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReceivingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE r.id = $1");
        sqlx::query_as::<_, ReceivingDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all receivings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ReceivingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY r.created_at DESC, r.id DESC");
        sqlx::query_as::<_, ReceivingDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created receivings.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ReceivingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY r.created_at DESC, r.id DESC LIMIT $1");
        sqlx::query_as::<_, ReceivingDetail>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Receivings awaiting a decision, oldest first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<ReceivingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE r.status_approval = $1 ORDER BY r.created_at ASC, r.id ASC"
        );
        sqlx::query_as::<_, ReceivingDetail>(&query)
            .bind(APPROVAL_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Receivings whose `tanggal_terima` falls within `[start, end]`, newest first.
    pub async fn list_by_date_range(
        pool: &PgPool,
        start: BusinessDate,
        end: BusinessDate,
    ) -> Result<Vec<ReceivingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE r.tanggal_terima BETWEEN $1 AND $2 \
             ORDER BY r.tanggal_terima DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReceivingDetail>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
