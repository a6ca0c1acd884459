//! Dashboard read models.

use gudang_core::dashboard::{Activity, MonthlyTrend};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::item::Item;

/// Headline counters for `GET /dashboard/stats`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_items: i64,
    pub total_stock: i64,
    pub low_stock_count: i64,
    pub active_borrowings_count: i64,
    pub pending_receivings_count: i64,
}

/// Item count and stock total for one category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryStat {
    pub name: String,
    pub count: i64,
    pub stock: i64,
}

/// Full payload for `GET /dashboard/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub summary: DashboardSummary,
    pub recent_activities: Vec<Activity>,
    pub category_data: Vec<CategoryStat>,
    pub low_stock_items: Vec<Item>,
}

/// Full payload for `GET /dashboard/trends`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTrends {
    pub monthly_data: Vec<MonthlyTrend>,
}
