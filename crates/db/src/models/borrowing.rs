//! Borrowing entity model and DTOs.

use gudang_core::types::{BusinessDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `borrowings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Borrowing {
    pub id: DbId,
    pub item_id: DbId,
    pub nama_proyek: String,
    pub peminjam: String,
    pub qty: i32,
    pub tanggal_pinjam: BusinessDate,
    pub tanggal_kembali: Option<BusinessDate>,
    pub status: String,
    pub keterangan: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A borrowing joined with its item's display fields and the creator's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BorrowingDetail {
    pub id: DbId,
    pub item_id: DbId,
    pub nama_proyek: String,
    pub peminjam: String,
    pub qty: i32,
    pub tanggal_pinjam: BusinessDate,
    pub tanggal_kembali: Option<BusinessDate>,
    pub status: String,
    pub keterangan: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub nama_barang: String,
    pub kategori: String,
    pub satuan: String,
    pub created_by_username: String,
}

/// Request body for `POST /borrowings`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBorrowing {
    pub item_id: DbId,
    #[validate(length(min = 1, message = "Nama proyek is required"))]
    pub nama_proyek: String,
    #[validate(length(min = 1, message = "Peminjam is required"))]
    pub peminjam: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub qty: i32,
    pub tanggal_pinjam: BusinessDate,
    pub keterangan: Option<String>,
}

/// Request body for `PUT /borrowings/{id}/return`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReturnBorrowing {
    pub tanggal_kembali: Option<BusinessDate>,
}
