//! Handlers for the `/auth` resource (login, logout, register, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gudang_core::error::CoreError;
use gudang_core::roles::{Permission, Role};
use gudang_db::models::user::{CreateUser, RegisterUser, UserInfo};
use gudang_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserInfo,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with username + password and receive a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %input.username, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    let role: Role = user
        .role
        .parse()
        .map_err(|_| AppError::InternalError(format!("Stored role '{}' is invalid", user.role)))?;
    let token = generate_token(user.id, &user.username, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, role = %role, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: user.into(),
    }))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so logout is an acknowledgement; the client drops
/// its token.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logout successful"))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        })?;
    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/auth/register
///
/// Create a user account. Super admin only.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(input): ValidJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    auth.require(Permission::RegisterUsers)?;

    let role: Role = input.role.parse()?;
    validate_password_strength(&input.password).map_err(CoreError::Validation)?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(CoreError::DuplicateUsername(input.username).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    // A concurrent insert of the same name still fails on `uq_users_username`.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
            role: role.as_str().to_string(),
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %role,
        created_by = auth.user_id,
        "User registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully",
            user: user.into(),
        }),
    ))
}
