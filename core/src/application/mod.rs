use anyhow::Context;

use crate::{
    domain::common::{NourishConfig, services::Service},
    infrastructure::{clock::SystemClock, inventory::HttpInventoryRepository},
};

pub type NourishService = Service<HttpInventoryRepository, SystemClock>;

pub fn create_service(config: NourishConfig) -> Result<NourishService, anyhow::Error> {
    let inventory_repository = HttpInventoryRepository::new(config.backend)
        .context("failed to create inventory repository")?;

    Ok(Service::new(inventory_repository, SystemClock))
}
