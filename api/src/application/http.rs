pub mod donation;
pub mod health;
pub mod inventory;
pub mod query_extractor;
pub mod query_params;
pub mod server;
