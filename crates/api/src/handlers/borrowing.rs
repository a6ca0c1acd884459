//! Handlers for the `/borrowings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gudang_core::error::CoreError;
use gudang_core::roles::Permission;
use gudang_core::types::DbId;
use gudang_db::models::borrowing::{BorrowingDetail, CreateBorrowing, ReturnBorrowing};
use gudang_db::repositories::BorrowingRepo;
use gudang_db::workflows::borrowing as workflow;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{QueryParams, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::query::DateRangeParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BorrowingsResponse {
    pub borrowings: Vec<BorrowingDetail>,
}

#[derive(Debug, Serialize)]
pub struct BorrowingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub borrowing: BorrowingDetail,
}

/// GET /api/borrowings
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<BorrowingsResponse>> {
    auth.require(Permission::ViewInventory)?;
    let borrowings = BorrowingRepo::list(&state.pool).await?;
    Ok(Json(BorrowingsResponse { borrowings }))
}

/// GET /api/borrowings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BorrowingResponse>> {
    auth.require(Permission::ViewInventory)?;
    let borrowing = BorrowingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Borrowing",
            id,
        })?;
    Ok(Json(BorrowingResponse {
        message: None,
        borrowing,
    }))
}

/// POST /api/borrowings
///
/// Records the borrowing and debits the item's stock in one transaction.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(input): ValidJson<CreateBorrowing>,
) -> AppResult<(StatusCode, Json<BorrowingResponse>)> {
    auth.require(Permission::CreateBorrowing)?;
    let borrowing = workflow::create_borrowing(&state.pool, input, auth.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(BorrowingResponse {
            message: Some("Borrowing created successfully"),
            borrowing,
        }),
    ))
}

/// PUT /api/borrowings/{id}/return
pub async fn return_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<ReturnBorrowing>,
) -> AppResult<Json<BorrowingResponse>> {
    auth.require(Permission::ReturnBorrowing)?;
    let borrowing = workflow::return_borrowing(&state.pool, id, input.tanggal_kembali).await?;
    Ok(Json(BorrowingResponse {
        message: Some("Item returned successfully"),
        borrowing,
    }))
}

/// GET /api/borrowings/reports/active
pub async fn active(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<BorrowingsResponse>> {
    auth.require(Permission::ViewInventory)?;
    let borrowings = BorrowingRepo::list_active(&state.pool).await?;
    Ok(Json(BorrowingsResponse { borrowings }))
}

/// GET /api/borrowings/reports/date-range?startDate=&endDate=
pub async fn date_range(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<DateRangeParams>,
) -> AppResult<Json<BorrowingsResponse>> {
    auth.require(Permission::ExportReports)?;
    let (start, end) = params.bounds()?;
    let borrowings = BorrowingRepo::list_by_date_range(&state.pool, start, end).await?;
    Ok(Json(BorrowingsResponse { borrowings }))
}
