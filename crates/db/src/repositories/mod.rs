//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Read methods accept `&PgPool`; methods that must run inside a workflow
//! transaction accept `&mut PgConnection` instead.

pub mod borrowing_repo;
pub mod dashboard_repo;
pub mod item_repo;
pub mod receiving_repo;
pub mod user_repo;

pub use borrowing_repo::BorrowingRepo;
pub use dashboard_repo::DashboardRepo;
pub use item_repo::ItemRepo;
pub use receiving_repo::ReceivingRepo;
pub use user_repo::UserRepo;
