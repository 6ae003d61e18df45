use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::expiration::{ClassifiedItem, FoodItem, FoodItemRecord, SeverityTier};

/// Owned, serialisable form of a [`ClassifiedItem`].
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClassifiedFoodItem {
    #[schema(value_type = FoodItemRecord)]
    pub item: FoodItem,
    pub days_until_expiration: Option<i64>,
    pub severity_tier: SeverityTier,
    pub badge_label: String,
    pub donation_eligible: bool,
}

impl From<ClassifiedItem<'_>> for ClassifiedFoodItem {
    fn from(classified: ClassifiedItem<'_>) -> Self {
        Self {
            item: classified.item.clone(),
            days_until_expiration: classified.days_until_expiration,
            severity_tier: classified.severity_tier,
            badge_label: classified.badge_label(),
            donation_eligible: classified.is_donation_eligible(),
        }
    }
}
