//! Route definitions for the `/borrowings` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::borrowing;
use crate::state::AppState;

/// Routes mounted at `/borrowings`.
///
/// ```text
/// GET  /                     -> list
/// POST /                     -> create (admin)
/// GET  /reports/active       -> active
/// GET  /reports/date-range   -> date_range
/// GET  /{id}                 -> get_by_id
/// PUT  /{id}/return          -> return_item (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(borrowing::list).post(borrowing::create))
        .route("/reports/active", get(borrowing::active))
        .route("/reports/date-range", get(borrowing::date_range))
        .route("/{id}", get(borrowing::get_by_id))
        .route("/{id}/return", put(borrowing::return_item))
}
