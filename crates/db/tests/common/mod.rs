#![allow(dead_code)]

use chrono::NaiveDate;
use gudang_core::types::DbId;
use gudang_db::models::item::{CreateItem, Item};
use gudang_db::models::user::CreateUser;
use gudang_db::repositories::{ItemRepo, UserRepo};
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Insert a user with a placeholder hash; these tests never log in.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
    .id
}

pub async fn create_item(pool: &PgPool, name: &str, stok_current: i32, stok_minimal: i32) -> Item {
    create_item_in(pool, name, "Perkakas", stok_current, stok_minimal).await
}

pub async fn create_item_in(
    pool: &PgPool,
    name: &str,
    kategori: &str,
    stok_current: i32,
    stok_minimal: i32,
) -> Item {
    ItemRepo::create(
        pool,
        &CreateItem {
            nama_barang: name.to_string(),
            kategori: kategori.to_string(),
            satuan: "pcs".to_string(),
            stok_current: Some(stok_current),
            stok_minimal: Some(stok_minimal),
        },
    )
    .await
    .expect("item creation should succeed")
}

pub async fn stock_of(pool: &PgPool, item_id: DbId) -> i32 {
    ItemRepo::find_by_id(pool, item_id)
        .await
        .unwrap()
        .expect("item should exist")
        .stok_current
}
