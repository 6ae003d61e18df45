pub mod common;
pub mod expiration;
pub mod inventory;
