//! Item entity model and DTOs.

use gudang_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub nama_barang: String,
    pub kategori: String,
    pub satuan: String,
    pub stok_current: i32,
    pub stok_minimal: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an item. `stok_current` is the opening balance.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "Nama barang is required"))]
    pub nama_barang: String,
    #[validate(length(min = 1, message = "Kategori is required"))]
    pub kategori: String,
    #[validate(length(min = 1, message = "Satuan is required"))]
    pub satuan: String,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0, message = "stok_current must not be negative"))]
    pub stok_current: Option<i32>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0, message = "stok_minimal must not be negative"))]
    pub stok_minimal: Option<i32>,
}

/// DTO for updating an item's descriptive fields and threshold.
///
/// The current quantity is not accepted here; it only moves through the
/// stock ledger.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "Nama barang is required"))]
    pub nama_barang: String,
    #[validate(length(min = 1, message = "Kategori is required"))]
    pub kategori: String,
    #[validate(length(min = 1, message = "Satuan is required"))]
    pub satuan: String,
    #[validate(range(min = 0, message = "stok_minimal must not be negative"))]
    pub stok_minimal: Option<i32>,
}

/// Request body for `PUT /items/{id}/stock`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StockAdjustment {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    /// `add` or `subtract`.
    pub operation: String,
}
