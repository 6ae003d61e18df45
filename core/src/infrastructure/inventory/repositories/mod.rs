pub mod http_inventory_repository;
