//! Repository for the `borrowings` table.

use gudang_core::borrowing::{STATUS_BORROWED, STATUS_RETURNED};
use gudang_core::types::{BusinessDate, DbId};
use sqlx::{PgConnection, PgPool};

use crate::models::borrowing::{Borrowing, BorrowingDetail, CreateBorrowing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_id, nama_proyek, peminjam, qty, tanggal_pinjam, \
     tanggal_kembali, status, keterangan, created_by, created_at, updated_at";

/// Joined projection with item display fields and the creator's username.
const DETAIL_SELECT: &str = "SELECT b.id, b.item_id, b.nama_proyek, b.peminjam, b.qty, \
     b.tanggal_pinjam, b.tanggal_kembali, b.status, b.keterangan, b.created_by, \
     b.created_at, b.updated_at, \
     i.nama_barang, i.kategori, i.satuan, u.username AS created_by_username \
     FROM borrowings b \
     JOIN items i ON i.id = b.item_id \
     JOIN users u ON u.id = b.created_by";

/// Provides inserts, the return transition, and joined listings.
pub struct BorrowingRepo;

impl BorrowingRepo {
    /// Insert a new borrowing in the `dipinjam` state.
    pub async fn insert(
        conn: &mut PgConnection,
        input: &CreateBorrowing,
        created_by: DbId,
    ) -> Result<Borrowing, sqlx::Error> {
        let query = format!(
            "INSERT INTO borrowings
                (item_id, nama_proyek, peminjam, qty, tanggal_pinjam, keterangan, status, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Borrowing>(&query)
            .bind(input.item_id)
            .bind(&input.nama_proyek)
            .bind(&input.peminjam)
            .bind(input.qty)
            .bind(input.tanggal_pinjam)
            .bind(&input.keterangan)
            .bind(STATUS_BORROWED)
            .bind(created_by)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a borrowing and lock its row until the transaction ends.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Borrowing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM borrowings WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Borrowing>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Flip a borrowing to `dikembalikan`.
    ///
    /// Only matches rows still in `dipinjam`; returns `None` otherwise.
    pub async fn mark_returned(
        conn: &mut PgConnection,
        id: DbId,
        tanggal_kembali: BusinessDate,
    ) -> Result<Option<Borrowing>, sqlx::Error> {
        let query = format!(
            "UPDATE borrowings SET status = $2, tanggal_kembali = $3
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Borrowing>(&query)
            .bind(id)
            .bind(STATUS_RETURNED)
            .bind(tanggal_kembali)
            .bind(STATUS_BORROWED)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BorrowingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE b.id = $1");
        sqlx::query_as::<_, BorrowingDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all borrowings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BorrowingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY b.created_at DESC, b.id DESC");
        sqlx::query_as::<_, BorrowingDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created borrowings.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<BorrowingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY b.created_at DESC, b.id DESC LIMIT $1");
        sqlx::query_as::<_, BorrowingDetail>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Borrowings not yet returned, oldest borrow date first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<BorrowingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE b.status = $1 ORDER BY b.tanggal_pinjam ASC, b.id ASC"
        );
        sqlx::query_as::<_, BorrowingDetail>(&query)
            .bind(STATUS_BORROWED)
            .fetch_all(pool)
            .await
    }

    /// Borrowings whose `tanggal_pinjam` falls within `[start, end]`, newest first.
    pub async fn list_by_date_range(
        pool: &PgPool,
        start: BusinessDate,
        end: BusinessDate,
    ) -> Result<Vec<BorrowingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE b.tanggal_pinjam BETWEEN $1 AND $2 \
             ORDER BY b.tanggal_pinjam DESC, b.id DESC"
        );
        sqlx::query_as::<_, BorrowingDetail>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
