//! Handlers for the `/items` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gudang_core::error::CoreError;
use gudang_core::roles::Permission;
use gudang_core::stock::StockDirection;
use gudang_core::types::DbId;
use gudang_db::models::item::{CreateItem, Item, StockAdjustment, UpdateItem};
use gudang_db::repositories::ItemRepo;
use gudang_db::workflows::ledger;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub item: Item,
}

fn item_not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Item", id }
}

/// GET /api/items
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<ItemsResponse>> {
    auth.require(Permission::ViewInventory)?;
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(ItemsResponse { items }))
}

/// GET /api/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemResponse>> {
    auth.require(Permission::ViewInventory)?;
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(ItemResponse {
        message: None,
        item,
    }))
}

/// POST /api/items
///
/// `stok_current` in the body is the opening balance; afterwards it only
/// moves through the ledger.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(input): ValidJson<CreateItem>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    auth.require(Permission::ManageItems)?;
    let item = ItemRepo::create(&state.pool, &input).await?;

    tracing::info!(item_id = item.id, user_id = auth.user_id, "Item created");

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: Some("Item created successfully"),
            item,
        }),
    ))
}

/// PUT /api/items/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateItem>,
) -> AppResult<Json<ItemResponse>> {
    auth.require(Permission::ManageItems)?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| item_not_found(id))?;

    tracing::info!(item_id = id, user_id = auth.user_id, "Item updated");

    Ok(Json(ItemResponse {
        message: Some("Item updated successfully"),
        item,
    }))
}

/// DELETE /api/items/{id}
///
/// Items with borrowing or receiving history cannot be deleted (409).
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    auth.require(Permission::DeleteItems)?;
    if !ItemRepo::delete(&state.pool, id).await? {
        return Err(item_not_found(id).into());
    }

    tracing::info!(item_id = id, user_id = auth.user_id, "Item deleted");

    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

/// GET /api/items/reports/low-stock
pub async fn low_stock(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ItemsResponse>> {
    auth.require(Permission::ViewInventory)?;
    let items = ItemRepo::list_low_stock(&state.pool).await?;
    Ok(Json(ItemsResponse { items }))
}

/// PUT /api/items/{id}/stock
///
/// Manual correction through the guarded ledger: a subtraction can never take
/// stock below zero.
pub async fn adjust_stock(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<StockAdjustment>,
) -> AppResult<Json<ItemResponse>> {
    auth.require(Permission::AdjustStock)?;
    let direction: StockDirection = input.operation.parse()?;

    let item = ledger::apply_manual_adjustment(&state.pool, id, input.quantity, direction).await?;

    Ok(Json(ItemResponse {
        message: Some("Stock updated successfully"),
        item,
    }))
}
