//! Repository for the `items` table.

use gudang_core::stock::StockDirection;
use gudang_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::item::{CreateItem, Item, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, nama_barang, kategori, satuan, stok_current, stok_minimal, created_at, updated_at";

/// Provides CRUD operations and the guarded stock update for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Missing `stok_current` / `stok_minimal` default to 0.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (nama_barang, kategori, satuan, stok_current, stok_minimal)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.nama_barang)
            .bind(&input.kategori)
            .bind(&input.satuan)
            .bind(input.stok_current)
            .bind(input.stok_minimal)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item and lock its row until the surrounding transaction ends.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all items ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY nama_barang ASC, id ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// List items at or below their minimum stock, ordered by name.
    pub async fn list_low_stock(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE stok_current <= stok_minimal
             ORDER BY nama_barang ASC, id ASC"
        );
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Update an item's descriptive fields and threshold. `stok_current` is
    /// never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                nama_barang = $2,
                kategori = $3,
                satuan = $4,
                stok_minimal = COALESCE($5, stok_minimal)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.nama_barang)
            .bind(&input.kategori)
            .bind(&input.satuan)
            .bind(input.stok_minimal)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was removed.
    ///
    /// Items referenced by borrowings or receivings fail with a foreign key
    /// violation.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply `stok_current +/- qty` in a single statement.
    ///
    /// A subtraction only matches when `stok_current >= qty` and an addition
    /// only when the sum still fits an `INTEGER`, so the check and the write
    /// cannot be split by a concurrent writer. Returns `None` when the item is
    /// missing or the guard did not match.
    pub async fn adjust_stock(
        conn: &mut PgConnection,
        id: DbId,
        qty: i32,
        direction: StockDirection,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = match direction {
            StockDirection::Add => format!(
                "UPDATE items SET stok_current = stok_current + $2
                 WHERE id = $1 AND stok_current <= 2147483647 - $2
                 RETURNING {COLUMNS}"
            ),
            StockDirection::Subtract => format!(
                "UPDATE items SET stok_current = stok_current - $2
                 WHERE id = $1 AND stok_current >= $2
                 RETURNING {COLUMNS}"
            ),
        };
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(qty)
            .fetch_optional(&mut *conn)
            .await
    }
}
