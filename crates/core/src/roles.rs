//! Roles and the permission table.
//!
//! Role names must match the `CHECK` constraint on `users.role` in
//! `20260301000001_create_users_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_SUPER_ADMIN: &str = "super_admin";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CLIENT: &str = "client";

/// A user's role. Ordered by privilege: `Client < Admin < SuperAdmin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Admin,
    SuperAdmin,
}

/// An operation that is gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Read items, borrowings, receivings, dashboards.
    ViewInventory,
    /// Pull report data for export.
    ExportReports,
    /// Create and edit items.
    ManageItems,
    /// Manual stock adjustment on an item.
    AdjustStock,
    DeleteItems,
    CreateBorrowing,
    ReturnBorrowing,
    CreateReceiving,
    /// Approve or reject a pending receiving.
    ResolveReceiving,
    RegisterUsers,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 10] = [
        Permission::ViewInventory,
        Permission::ExportReports,
        Permission::ManageItems,
        Permission::AdjustStock,
        Permission::DeleteItems,
        Permission::CreateBorrowing,
        Permission::ReturnBorrowing,
        Permission::CreateReceiving,
        Permission::ResolveReceiving,
        Permission::RegisterUsers,
    ];

    /// The least privileged role that holds this permission.
    ///
    /// Roles are strictly nested, so this single column is the whole
    /// permission table.
    pub fn minimum_role(self) -> Role {
        match self {
            Permission::ViewInventory | Permission::ExportReports => Role::Client,
            Permission::ManageItems
            | Permission::AdjustStock
            | Permission::CreateBorrowing
            | Permission::ReturnBorrowing
            | Permission::CreateReceiving => Role::Admin,
            Permission::DeleteItems
            | Permission::ResolveReceiving
            | Permission::RegisterUsers => Role::SuperAdmin,
        }
    }
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => ROLE_SUPER_ADMIN,
            Role::Admin => ROLE_ADMIN,
            Role::Client => ROLE_CLIENT,
        }
    }

    /// Whether this role may perform `permission`.
    pub fn allows(self, permission: Permission) -> bool {
        self >= permission.minimum_role()
    }

    /// Returns `Forbidden` when the role lacks `permission`.
    pub fn require(self, permission: Permission) -> Result<(), CoreError> {
        if self.allows(permission) {
            Ok(())
        } else {
            Err(CoreError::Forbidden("Insufficient permissions".into()))
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_SUPER_ADMIN => Ok(Role::SuperAdmin),
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_CLIENT => Ok(Role::Client),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_SUPER_ADMIN}, {ROLE_ADMIN}, {ROLE_CLIENT}"
            ))),
        }
    }
}
