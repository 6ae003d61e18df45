pub mod repositories;

pub use repositories::http_inventory_repository::HttpInventoryRepository;
