pub mod classify_items;
pub mod get_inventory_overview;
pub mod get_use_soon;
pub mod list_inventory;
