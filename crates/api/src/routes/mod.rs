pub mod auth;
pub mod borrowing;
pub mod dashboard;
pub mod health;
pub mod item;
pub mod receiving;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
/// /auth/logout                             logout (public)
/// /auth/register                           register (super_admin)
/// /auth/me                                 current user
///
/// /items                                   list, create
/// /items/reports/low-stock                 items at or below threshold
/// /items/{id}                              get, update, delete
/// /items/{id}/stock                        manual ledger adjustment (PUT)
///
/// /borrowings                              list, create
/// /borrowings/reports/active               not yet returned
/// /borrowings/reports/date-range           by borrow date
/// /borrowings/{id}                         get
/// /borrowings/{id}/return                  return (PUT)
///
/// /receivings                              list, create
/// /receivings/reports/pending              awaiting approval
/// /receivings/reports/date-range           by receipt date
/// /receivings/{id}                         get
/// /receivings/{id}/approve                 approve or reject (PUT, super_admin)
///
/// /dashboard/stats                         counters and previews
/// /dashboard/trends                        monthly volume
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/items", item::router())
        .nest("/borrowings", borrowing::router())
        .nest("/receivings", receiving::router())
        .nest("/dashboard", dashboard::router())
}
