//! Role-based access checks for authenticated handlers.
//!
//! Every handler takes an [`AuthUser`] and calls [`AuthUser::require`] with
//! the permission its operation needs, before touching storage.

use gudang_core::roles::Permission;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

impl AuthUser {
    /// Fail with 403 unless this user's role holds `permission`.
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        self.role.require(permission).map_err(|err| {
            tracing::warn!(
                user_id = self.user_id,
                role = %self.role,
                ?permission,
                "Permission denied"
            );
            AppError::Core(err)
        })
    }
}
