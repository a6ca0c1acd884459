//! Receiving entity model and DTOs.

use gudang_core::types::{BusinessDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `receivings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Receiving {
    pub id: DbId,
    pub item_id: DbId,
    pub supplier: String,
    pub qty: i32,
    pub tanggal_terima: BusinessDate,
    pub status_approval: String,
    pub created_by: DbId,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A receiving joined with its item's display fields and the names of the
/// creator and resolver.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReceivingDetail {
    pub id: DbId,
    pub item_id: DbId,
    pub supplier: String,
    pub qty: i32,
    pub tanggal_terima: BusinessDate,
    pub status_approval: String,
    pub created_by: DbId,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub nama_barang: String,
    pub kategori: String,
    pub satuan: String,
    pub created_by_username: String,
    pub approved_by_username: Option<String>,
}

/// Request body for `POST /receivings`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReceiving {
    pub item_id: DbId,
    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub qty: i32,
    pub tanggal_terima: BusinessDate,
}

/// Request body for `PUT /receivings/{id}/approve`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResolveReceiving {
    /// `approved` or `rejected`.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}
