#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use gudang_api::auth::jwt::{generate_token, JwtConfig};
use gudang_api::auth::password::hash_password;
use gudang_api::config::ServerConfig;
use gudang_api::router::build_app_router;
use gudang_api::state::AppState;
use gudang_core::roles::Role;
use gudang_db::models::item::{CreateItem, Item};
use gudang_db::models::user::{CreateUser, User};
use gudang_db::repositories::{ItemRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "rahasia-gudang-123";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_hours: 24,
        },
        bootstrap_admin_username: "superadmin".to_string(),
        bootstrap_admin_password: None,
    }
}

/// Build the full application router, same middleware as production.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user with [`TEST_PASSWORD`] directly in the database.
pub async fn create_user(pool: &PgPool, username: &str, role: Role) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            role: role.as_str().to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Create a user and return a bearer token for them.
pub async fn token_for(pool: &PgPool, username: &str, role: Role) -> String {
    let user = create_user(pool, username, role).await;
    generate_token(user.id, &user.username, role, &test_config().jwt)
        .expect("token generation should succeed")
}

pub async fn create_item(pool: &PgPool, name: &str, stok_current: i32, stok_minimal: i32) -> Item {
    ItemRepo::create(
        pool,
        &CreateItem {
            nama_barang: name.to_string(),
            kategori: "Perkakas".to_string(),
            satuan: "pcs".to_string(),
            stok_current: Some(stok_current),
            stok_minimal: Some(stok_minimal),
        },
    )
    .await
    .expect("item creation should succeed")
}

pub async fn stock_of(pool: &PgPool, item_id: i64) -> i32 {
    ItemRepo::find_by_id(pool, item_id)
        .await
        .unwrap()
        .expect("item should exist")
        .stok_current
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(json)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(json)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
