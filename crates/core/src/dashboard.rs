//! Read-side rollups for the dashboard: activity feed and monthly trends.
//!
//! The database layer fetches plain rows; the merging, month bucketing and
//! labelling live here so they can be tested without a database.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::types::{BusinessDate, DbId};

/// Entries taken from each source before merging the activity feed.
pub const RECENT_PER_SOURCE: usize = 5;

/// Maximum entries in the merged activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Number of low-stock items shown on the dashboard.
pub const LOW_STOCK_PREVIEW: usize = 5;

/// Calendar months covered by the trend chart, including the current one.
pub const TREND_MONTHS: u32 = 6;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Borrowing,
    Receiving,
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub date: BusinessDate,
    pub status: String,
}

impl Activity {
    pub fn borrowing(
        id: DbId,
        peminjam: &str,
        qty: i32,
        satuan: &str,
        nama_barang: &str,
        tanggal_pinjam: BusinessDate,
        status: &str,
    ) -> Self {
        Self {
            id,
            kind: ActivityKind::Borrowing,
            description: format!("{peminjam} meminjam {qty} {satuan} {nama_barang}"),
            date: tanggal_pinjam,
            status: status.to_string(),
        }
    }

    pub fn receiving(
        id: DbId,
        supplier: &str,
        qty: i32,
        satuan: &str,
        nama_barang: &str,
        tanggal_terima: BusinessDate,
        status_approval: &str,
    ) -> Self {
        Self {
            id,
            kind: ActivityKind::Receiving,
            description: format!("Terima {qty} {satuan} {nama_barang} dari {supplier}"),
            date: tanggal_terima,
            status: status_approval.to_string(),
        }
    }
}

/// Merge the newest borrowings and receivings into one feed.
///
/// Each input is expected newest-created first. At most
/// [`RECENT_PER_SOURCE`] entries are taken from each, the union is ordered by
/// business date (newest first, ties keep input order) and capped at
/// [`RECENT_ACTIVITY_LIMIT`].
pub fn merge_recent_activity(
    borrowings: Vec<Activity>,
    receivings: Vec<Activity>,
) -> Vec<Activity> {
    let mut feed: Vec<Activity> = borrowings
        .into_iter()
        .take(RECENT_PER_SOURCE)
        .chain(receivings.into_iter().take(RECENT_PER_SOURCE))
        .collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(RECENT_ACTIVITY_LIMIT);
    feed
}

/// An inclusive calendar-month date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(start);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// ISO month key, e.g. `2026-03`.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.start.year(), self.start.month())
    }

    /// Short display label, e.g. `Mar 2026`.
    pub fn label(&self) -> String {
        let abbr = MONTH_ABBREVIATIONS[self.start.month0() as usize];
        format!("{abbr} {}", self.start.year())
    }
}

/// The `count` calendar months ending with the month of `today`, oldest first.
pub fn trailing_months(today: NaiveDate, count: u32) -> Vec<MonthWindow> {
    let current = MonthWindow::containing(today);
    (0..count)
        .rev()
        .filter_map(|back| current.start.checked_sub_months(Months::new(back)))
        .map(MonthWindow::containing)
        .collect()
}

/// A dated quantity used for trend bucketing.
#[derive(Debug, Clone, Copy)]
pub struct TrendSample {
    pub date: NaiveDate,
    pub qty: i32,
    /// For receivings: whether the delivery was approved. Always `true` for
    /// borrowings.
    pub approved: bool,
}

/// Borrowing and receiving volume for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: String,
    pub key: String,
    pub borrowings: i64,
    pub receivings: i64,
    pub total_borrowed_qty: i64,
    pub total_received_qty: i64,
}

/// Bucket borrowings and receivings into the given month windows.
///
/// Receivings are counted regardless of status, but only approved ones add
/// to `total_received_qty`. Samples outside every window are ignored.
pub fn build_trends(
    windows: &[MonthWindow],
    borrowings: &[TrendSample],
    receivings: &[TrendSample],
) -> Vec<MonthlyTrend> {
    windows
        .iter()
        .map(|window| {
            let mut trend = MonthlyTrend {
                month: window.label(),
                key: window.key(),
                borrowings: 0,
                receivings: 0,
                total_borrowed_qty: 0,
                total_received_qty: 0,
            };
            for sample in borrowings.iter().filter(|s| window.contains(s.date)) {
                trend.borrowings += 1;
                trend.total_borrowed_qty += i64::from(sample.qty);
            }
            for sample in receivings.iter().filter(|s| window.contains(s.date)) {
                trend.receivings += 1;
                if sample.approved {
                    trend.total_received_qty += i64::from(sample.qty);
                }
            }
            trend
        })
        .collect()
}
