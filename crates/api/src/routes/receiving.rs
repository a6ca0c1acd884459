//! Route definitions for the `/receivings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::receiving;
use crate::state::AppState;

/// Routes mounted at `/receivings`.
///
/// ```text
/// GET  /                     -> list
/// POST /                     -> create (admin)
/// GET  /reports/pending      -> pending
/// GET  /reports/date-range   -> date_range
/// GET  /{id}                 -> get_by_id
/// PUT  /{id}/approve         -> approve (super_admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(receiving::list).post(receiving::create))
        .route("/reports/pending", get(receiving::pending))
        .route("/reports/date-range", get(receiving::date_range))
        .route("/{id}", get(receiving::get_by_id))
        .route("/{id}/approve", put(receiving::approve))
}
