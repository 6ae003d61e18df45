pub mod clock;
pub mod inventory;
