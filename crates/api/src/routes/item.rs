//! Route definitions for the `/items` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create (admin)
/// GET    /reports/low-stock   -> low_stock
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update (admin)
/// DELETE /{id}                -> delete (super_admin)
/// PUT    /{id}/stock          -> adjust_stock (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::list).post(item::create))
        .route("/reports/low-stock", get(item::low_stock))
        .route(
            "/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
        .route("/{id}/stock", put(item::adjust_stock))
}
