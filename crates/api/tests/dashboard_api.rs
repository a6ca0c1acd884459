//! HTTP-level tests for `/api/dashboard`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_item, get, get_auth, token_for};
use gudang_core::roles::Role;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_payload_shape(pool: PgPool) {
    create_item(&pool, "Semen", 2, 5).await;
    create_item(&pool, "Pasir", 9, 1).await;
    let token = token_for(&pool, "client1", Role::Client).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/dashboard/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["summary"]["totalItems"], 2);
    assert_eq!(json["summary"]["totalStock"], 11);
    assert_eq!(json["summary"]["lowStockCount"], 1);
    assert_eq!(json["summary"]["activeBorrowingsCount"], 0);
    assert_eq!(json["summary"]["pendingReceivingsCount"], 0);
    assert!(json["recentActivities"].as_array().unwrap().is_empty());
    assert_eq!(json["categoryData"][0]["name"], "Perkakas");
    assert_eq!(json["lowStockItems"][0]["nama_barang"], "Semen");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trends_cover_six_months(pool: PgPool) {
    let token = token_for(&pool, "client1", Role::Client).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/dashboard/trends", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let months = json["monthlyData"].as_array().unwrap();
    assert_eq!(months.len(), 6);
    assert!(months.iter().all(|m| m["borrowings"] == 0));
    assert!(months[0]["key"].as_str().unwrap() < months[5]["key"].as_str().unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
