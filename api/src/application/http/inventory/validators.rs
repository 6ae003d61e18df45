use chrono::NaiveDate;
use nourish_core::domain::expiration::{FoodItem, FoodItemRecord};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

pub const MAX_CLASSIFY_ITEMS: u64 = 1000;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClassifyItemsValidator {
    #[validate(length(max = 1000, message = "at most 1000 items can be classified at once"))]
    #[schema(value_type = Vec<FoodItemRecord>)]
    pub items: Vec<FoodItem>,

    /// Calendar day to classify against, taken as midnight UTC. Defaults to now.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}
