//! Handlers for the `/receivings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gudang_core::error::CoreError;
use gudang_core::receiving::Decision;
use gudang_core::roles::Permission;
use gudang_core::types::DbId;
use gudang_db::models::receiving::{CreateReceiving, ReceivingDetail, ResolveReceiving};
use gudang_db::repositories::ReceivingRepo;
use gudang_db::workflows::receiving as workflow;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{QueryParams, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::query::DateRangeParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReceivingsResponse {
    pub receivings: Vec<ReceivingDetail>,
}

#[derive(Debug, Serialize)]
pub struct ReceivingResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub receiving: ReceivingDetail,
}

/// GET /api/receivings
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ReceivingsResponse>> {
    auth.require(Permission::ViewInventory)?;
    let receivings = ReceivingRepo::list(&state.pool).await?;
    Ok(Json(ReceivingsResponse { receivings }))
}

/// GET /api/receivings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReceivingResponse>> {
    auth.require(Permission::ViewInventory)?;
    let receiving = ReceivingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Receiving",
            id,
        })?;
    Ok(Json(ReceivingResponse {
        message: None,
        receiving,
    }))
}

/// POST /api/receivings
///
/// The receiving starts `pending`; stock is untouched until approval.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(input): ValidJson<CreateReceiving>,
) -> AppResult<(StatusCode, Json<ReceivingResponse>)> {
    auth.require(Permission::CreateReceiving)?;
    let receiving = workflow::create_receiving(&state.pool, input, auth.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReceivingResponse {
            message: Some("Receiving created successfully, waiting for approval"),
            receiving,
        }),
    ))
}

/// PUT /api/receivings/{id}/approve
///
/// Body `{"status": "approved" | "rejected"}`. Super admin only.
pub async fn approve(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<ResolveReceiving>,
) -> AppResult<Json<ReceivingResponse>> {
    auth.require(Permission::ResolveReceiving)?;
    let decision: Decision = input.status.parse()?;

    let receiving = workflow::resolve_receiving(&state.pool, id, decision, auth.user_id).await?;

    let message = match decision {
        Decision::Approved => "Receiving approved successfully",
        Decision::Rejected => "Receiving rejected successfully",
    };
    Ok(Json(ReceivingResponse {
        message: Some(message),
        receiving,
    }))
}

/// GET /api/receivings/reports/pending
pub async fn pending(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ReceivingsResponse>> {
    auth.require(Permission::ViewInventory)?;
    let receivings = ReceivingRepo::list_pending(&state.pool).await?;
    Ok(Json(ReceivingsResponse { receivings }))
}

/// GET /api/receivings/reports/date-range?startDate=&endDate=
pub async fn date_range(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(params): QueryParams<DateRangeParams>,
) -> AppResult<Json<ReceivingsResponse>> {
    auth.require(Permission::ExportReports)?;
    let (start, end) = params.bounds()?;
    let receivings = ReceivingRepo::list_by_date_range(&state.pool, start, end).await?;
    Ok(Json(ReceivingsResponse { receivings }))
}
