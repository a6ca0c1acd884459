//! First-run provisioning of the super admin account.

use gudang_core::roles::Role;
use gudang_db::models::user::CreateUser;
use gudang_db::repositories::UserRepo;
use gudang_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Create the configured super admin when the `users` table is empty.
///
/// Returns `true` if an account was created. Does nothing when users already
/// exist or no bootstrap password is configured.
pub async fn ensure_super_admin(pool: &DbPool, config: &ServerConfig) -> AppResult<bool> {
    let Some(password) = config.bootstrap_admin_password.as_deref() else {
        return Ok(false);
    };
    if UserRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    validate_password_strength(password)
        .map_err(|msg| AppError::InternalError(format!("BOOTSTRAP_ADMIN_PASSWORD: {msg}")))?;
    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: config.bootstrap_admin_username.clone(),
            password_hash,
            role: Role::SuperAdmin.as_str().to_string(),
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        username = %user.username,
        "Bootstrap super admin created"
    );
    Ok(true)
}
