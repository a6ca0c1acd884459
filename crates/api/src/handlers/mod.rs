pub mod auth;
pub mod borrowing;
pub mod dashboard;
pub mod item;
pub mod receiving;
