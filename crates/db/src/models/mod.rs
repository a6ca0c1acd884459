//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Joined read views where listings need display fields from other tables
//! - `Deserialize` + `Validate` DTOs for request bodies

pub mod borrowing;
pub mod dashboard;
pub mod item;
pub mod receiving;
pub mod user;
