//! Stock-affecting operations and dashboard assembly.
//!
//! Every operation that writes a borrowing or receiving row and moves stock
//! does both inside one [`with_transaction`](crate::with_transaction) scope.
//!
//! - [`ledger`] -- the guarded stock adjustment every workflow goes through.
//! - [`borrowing`] -- borrow (debit) and return (credit).
//! - [`receiving`] -- pending receipt and its one-shot approval.
//! - [`dashboard`] -- read-only rollups.

use gudang_core::error::CoreError;

pub mod borrowing;
pub mod dashboard;
pub mod ledger;
pub mod receiving;

/// Failure from a workflow: either a domain rule or the database.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;
