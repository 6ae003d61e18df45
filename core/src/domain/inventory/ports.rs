use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::Paginated},
    expiration::FoodItem,
    inventory::{
        entities::ClassifiedFoodItem,
        value_objects::{
            ClassifyItemsInput, ClassifyItemsOutput, GetDonationCandidatesInput,
            GetOverviewInput, GetUseSoonInput, InventoryOverview, ListInventoryInput,
        },
    },
};

/// Source of the reference instant for requests that do not supply one.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Read access to the external inventory service.
pub trait InventoryRepository: Send + Sync {
    fn fetch_user_items(
        &self,
        user_id: &str,
        token: &str,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;
}

pub trait InventoryService: Send + Sync {
    fn get_overview(
        &self,
        input: GetOverviewInput,
    ) -> impl Future<Output = Result<InventoryOverview, CoreError>> + Send;

    fn list_items(
        &self,
        input: ListInventoryInput,
    ) -> impl Future<Output = Result<Paginated<ClassifiedFoodItem>, CoreError>> + Send;

    fn get_use_soon(
        &self,
        input: GetUseSoonInput,
    ) -> impl Future<Output = Result<Vec<ClassifiedFoodItem>, CoreError>> + Send;

    fn get_donation_candidates(
        &self,
        input: GetDonationCandidatesInput,
    ) -> impl Future<Output = Result<Vec<ClassifiedFoodItem>, CoreError>> + Send;

    /// Needs no backend: classifies the items it is given.
    fn classify_items(&self, input: ClassifyItemsInput) -> ClassifyItemsOutput;
}
