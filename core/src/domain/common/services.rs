use std::sync::Arc;

use crate::domain::inventory::ports::{Clock, InventoryRepository};

pub struct Service<IR, C>
where
    IR: InventoryRepository,
    C: Clock,
{
    pub(crate) inventory_repository: Arc<IR>,
    pub(crate) clock: Arc<C>,
}

impl<IR, C> Service<IR, C>
where
    IR: InventoryRepository,
    C: Clock,
{
    pub fn new(inventory_repository: IR, clock: C) -> Self {
        Self {
            inventory_repository: Arc::new(inventory_repository),
            clock: Arc::new(clock),
        }
    }
}

impl<IR, C> Clone for Service<IR, C>
where
    IR: InventoryRepository,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            inventory_repository: Arc::clone(&self.inventory_repository),
            clock: Arc::clone(&self.clock),
        }
    }
}
