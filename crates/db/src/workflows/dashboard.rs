//! Dashboard aggregator: read-only composition over items, borrowings and
//! receivings.

use chrono::NaiveDate;
use gudang_core::dashboard::{
    build_trends, merge_recent_activity, trailing_months, Activity, LOW_STOCK_PREVIEW,
    RECENT_PER_SOURCE, TREND_MONTHS,
};
use sqlx::PgPool;

use crate::models::dashboard::{DashboardStats, DashboardTrends};
use crate::repositories::{BorrowingRepo, DashboardRepo, ItemRepo, ReceivingRepo};

/// Counters, recent activity, category breakdown and a low-stock preview.
pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
    let summary = DashboardRepo::summary(pool).await?;
    let category_data = DashboardRepo::categories(pool).await?;

    let mut low_stock_items = ItemRepo::list_low_stock(pool).await?;
    low_stock_items.truncate(LOW_STOCK_PREVIEW);

    let recent_borrowings = BorrowingRepo::list_recent(pool, RECENT_PER_SOURCE as i64)
        .await?
        .into_iter()
        .map(|b| {
            Activity::borrowing(
                b.id,
                &b.peminjam,
                b.qty,
                &b.satuan,
                &b.nama_barang,
                b.tanggal_pinjam,
                &b.status,
            )
        })
        .collect();
    let recent_receivings = ReceivingRepo::list_recent(pool, RECENT_PER_SOURCE as i64)
        .await?
        .into_iter()
        .map(|r| {
            Activity::receiving(
                r.id,
                &r.supplier,
                r.qty,
                &r.satuan,
                &r.nama_barang,
                r.tanggal_terima,
                &r.status_approval,
            )
        })
        .collect();

    Ok(DashboardStats {
        summary,
        recent_activities: merge_recent_activity(recent_borrowings, recent_receivings),
        category_data,
        low_stock_items,
    })
}

/// Monthly borrowing/receiving volume for the trailing months up to `today`.
pub async fn trends(pool: &PgPool, today: NaiveDate) -> Result<DashboardTrends, sqlx::Error> {
    let windows = trailing_months(today, TREND_MONTHS);
    let (Some(first), Some(last)) = (windows.first(), windows.last()) else {
        return Ok(DashboardTrends {
            monthly_data: Vec::new(),
        });
    };

    let borrowings = DashboardRepo::borrowing_samples(pool, first.start, last.end).await?;
    let receivings = DashboardRepo::receiving_samples(pool, first.start, last.end).await?;

    Ok(DashboardTrends {
        monthly_data: build_trends(&windows, &borrowings, &receivings),
    })
}
