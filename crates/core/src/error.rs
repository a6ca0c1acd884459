use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Insufficient stock. Available: {available} {unit}")]
    InsufficientStock { available: i32, unit: String },

    #[error("Item already returned")]
    AlreadyReturned,

    #[error("Receiving already {status}")]
    AlreadyResolved { status: String },

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
