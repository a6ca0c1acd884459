//! Pure domain layer for the Gudang inventory service.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates lean on
//! these types and rules so the stock and approval invariants have a single,
//! unit-tested definition.

pub mod borrowing;
pub mod dashboard;
pub mod error;
pub mod receiving;
pub mod roles;
pub mod stock;
pub mod types;
