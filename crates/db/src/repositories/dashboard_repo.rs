//! Read-only aggregate queries behind the dashboard.

use gudang_core::borrowing::STATUS_BORROWED;
use gudang_core::dashboard::TrendSample;
use gudang_core::receiving::{APPROVAL_APPROVED, APPROVAL_PENDING};
use gudang_core::types::BusinessDate;
use sqlx::PgPool;

use crate::models::dashboard::{CategoryStat, DashboardSummary};

/// Provides counters, category rollups and trend samples.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Headline counters computed in a single round trip.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM items) AS total_items,
                (SELECT COALESCE(SUM(stok_current), 0)::BIGINT FROM items) AS total_stock,
                (SELECT COUNT(*) FROM items WHERE stok_current <= stok_minimal) AS low_stock_count,
                (SELECT COUNT(*) FROM borrowings WHERE status = $1) AS active_borrowings_count,
                (SELECT COUNT(*) FROM receivings WHERE status_approval = $2) AS pending_receivings_count",
        )
        .bind(STATUS_BORROWED)
        .bind(APPROVAL_PENDING)
        .fetch_one(pool)
        .await
    }

    /// Item count and stock total per category, ordered by category name.
    pub async fn categories(pool: &PgPool) -> Result<Vec<CategoryStat>, sqlx::Error> {
        sqlx::query_as::<_, CategoryStat>(
            "SELECT kategori AS name,
                    COUNT(*) AS count,
                    COALESCE(SUM(stok_current), 0)::BIGINT AS stock
             FROM items
             GROUP BY kategori
             ORDER BY kategori ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Borrow dates and quantities within `[start, end]`.
    pub async fn borrowing_samples(
        pool: &PgPool,
        start: BusinessDate,
        end: BusinessDate,
    ) -> Result<Vec<TrendSample>, sqlx::Error> {
        let rows: Vec<(BusinessDate, i32)> = sqlx::query_as(
            "SELECT tanggal_pinjam, qty FROM borrowings
             WHERE tanggal_pinjam BETWEEN $1 AND $2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, qty)| TrendSample {
                date,
                qty,
                approved: true,
            })
            .collect())
    }

    /// Receipt dates, quantities and approval flags within `[start, end]`.
    pub async fn receiving_samples(
        pool: &PgPool,
        start: BusinessDate,
        end: BusinessDate,
    ) -> Result<Vec<TrendSample>, sqlx::Error> {
        let rows: Vec<(BusinessDate, i32, String)> = sqlx::query_as(
            "SELECT tanggal_terima, qty, status_approval FROM receivings
             WHERE tanggal_terima BETWEEN $1 AND $2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, qty, status)| TrendSample {
                date,
                qty,
                approved: status == APPROVAL_APPROVED,
            })
            .collect())
    }
}
