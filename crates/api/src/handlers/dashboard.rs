//! Handlers for the `/dashboard` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gudang_core::roles::Permission;
use gudang_db::models::dashboard::{DashboardStats, DashboardTrends};
use gudang_db::workflows::dashboard;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<DashboardStats>> {
    auth.require(Permission::ViewInventory)?;
    Ok(Json(dashboard::stats(&state.pool).await?))
}

/// GET /api/dashboard/trends
///
/// Trailing six calendar months, ending with the current (UTC) month.
pub async fn trends(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DashboardTrends>> {
    auth.require(Permission::ViewInventory)?;
    let today = Utc::now().date_naive();
    Ok(Json(dashboard::trends(&state.pool, today).await?))
}
