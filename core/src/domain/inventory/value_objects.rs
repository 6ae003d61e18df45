use std::{cmp::Ordering, collections::BTreeMap, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::{OffsetLimit, Paginated},
    },
    expiration::{ClassifiedItem, FoodItem, SeverityTier, classify, is_expiring_within},
    inventory::entities::ClassifiedFoodItem,
};

/// Same default as the backend's expiring-soon query.
pub const DEFAULT_USE_SOON_WINDOW_DAYS: i64 = 3;
pub const MAX_USE_SOON_WINDOW_DAYS: i64 = 365;
pub const UNSPECIFIED_LOCATION: &str = "Unspecified";
/// A category consumed at least this often counts as a staple.
pub const STAPLE_CONSUMPTION_COUNT: usize = 3;
/// A staple with fewer active items than this is suggested for shopping.
pub const LOW_STOCK_COUNT: usize = 2;

pub fn resolve_window(window_days: Option<i64>) -> Result<i64, CoreError> {
    let window = window_days.unwrap_or(DEFAULT_USE_SOON_WINDOW_DAYS);
    if !(0..=MAX_USE_SOON_WINDOW_DAYS).contains(&window) {
        return Err(CoreError::Invalid(format!(
            "window must be between 0 and {MAX_USE_SOON_WINDOW_DAYS} days"
        )));
    }
    Ok(window)
}

#[derive(Debug, Clone)]
pub struct GetOverviewInput {
    pub user_id: String,
    pub token: String,
    pub window_days: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ListInventoryInput {
    pub user_id: String,
    pub token: String,
    pub query: InventoryQuery,
}

#[derive(Debug, Clone)]
pub struct GetUseSoonInput {
    pub user_id: String,
    pub token: String,
    pub window_days: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetDonationCandidatesInput {
    pub user_id: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ClassifyItemsInput {
    pub items: Vec<FoodItem>,
    pub reference: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClassifyItemsOutput {
    pub reference: DateTime<Utc>,
    pub items: Vec<ClassifiedFoodItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventorySortField {
    DaysUntilExpiration,
    Name,
    Category,
}

impl FromStr for InventorySortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" | "days_until_expiration" | "expiration_date" => {
                Ok(InventorySortField::DaysUntilExpiration)
            }
            "name" => Ok(InventorySortField::Name),
            "category" => Ok(InventorySortField::Category),
            other => Err(CoreError::Invalid(format!("cannot sort by '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySort {
    pub field: InventorySortField,
    pub descending: bool,
}

impl InventorySort {
    /// Stable: ties keep their input order. Unknown countdowns sort as the
    /// most urgent, alongside expired items.
    pub fn sort(&self, items: &mut [ClassifiedItem<'_>]) {
        items.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    fn compare(&self, a: &ClassifiedItem<'_>, b: &ClassifiedItem<'_>) -> Ordering {
        match self.field {
            InventorySortField::DaysUntilExpiration => a
                .days_until_expiration
                .unwrap_or(i64::MIN)
                .cmp(&b.days_until_expiration.unwrap_or(i64::MIN)),
            InventorySortField::Name => a
                .item
                .name
                .to_lowercase()
                .cmp(&b.item.name.to_lowercase()),
            InventorySortField::Category => a
                .item
                .category
                .to_lowercase()
                .cmp(&b.item.category.to_lowercase()),
        }
    }
}

/// Filters over a user's active (not consumed) items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub tier: Option<SeverityTier>,
    pub sort: Option<InventorySort>,
    pub pagination: OffsetLimit,
}

impl InventoryQuery {
    pub fn matches(&self, classified: &ClassifiedItem<'_>) -> bool {
        let item = classified.item;

        if let Some(category) = &self.category
            && !item.category.eq_ignore_ascii_case(category.trim())
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !item.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(tier) = self.tier
            && classified.severity_tier != tier
        {
            return false;
        }
        true
    }

    pub fn apply(
        &self,
        items: &[FoodItem],
        reference: DateTime<Utc>,
    ) -> Result<Paginated<ClassifiedFoodItem>, CoreError> {
        self.pagination.validate()?;

        let mut selected: Vec<ClassifiedItem<'_>> =
            classify(items.iter().filter(|item| !item.is_consumed), reference)
                .filter(|classified| self.matches(classified))
                .collect();

        if let Some(sort) = self.sort {
            sort.sort(&mut selected);
        }

        Ok(self
            .pagination
            .paginate(selected)
            .map_items(ClassifiedFoodItem::from))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TierCounts {
    pub fresh: usize,
    pub warning: usize,
    pub critical: usize,
    pub expired: usize,
}

impl TierCounts {
    pub fn record(&mut self, tier: SeverityTier) {
        match tier {
            SeverityTier::Fresh => self.fresh += 1,
            SeverityTier::Warning => self.warning += 1,
            SeverityTier::Critical => self.critical += 1,
            SeverityTier::Expired => self.expired += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.fresh + self.warning + self.critical + self.expired
    }
}

/// Dashboard summary of a user's pantry.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InventoryOverview {
    pub reference: DateTime<Utc>,
    pub window_days: i64,
    pub total_items: usize,
    pub consumed_items: usize,
    pub tiers: TierCounts,
    pub expiring_soon: usize,
    pub donation_eligible: usize,
    pub category_distribution: BTreeMap<String, usize>,
    pub location_distribution: BTreeMap<String, usize>,
    pub wasted_categories: BTreeMap<String, usize>,
    pub total_waste_value: f64,
    pub shopping_suggestions: Vec<String>,
}

impl InventoryOverview {
    pub fn from_items(items: &[FoodItem], reference: DateTime<Utc>, window_days: i64) -> Self {
        let (active, consumed): (Vec<&FoodItem>, Vec<&FoodItem>) =
            items.iter().partition(|item| !item.is_consumed);

        let mut tiers = TierCounts::default();
        let mut expiring_soon = 0;
        let mut donation_eligible = 0;
        let mut category_distribution = BTreeMap::new();
        let mut location_distribution = BTreeMap::new();
        let mut wasted_categories = BTreeMap::new();
        let mut total_waste_value = 0.0;

        for classified in classify(active.iter().copied(), reference) {
            let item = classified.item;
            tiers.record(classified.severity_tier);

            if is_expiring_within(classified.days_until_expiration, window_days) {
                expiring_soon += 1;
            }
            if classified.is_donation_eligible() {
                donation_eligible += 1;
            }

            *category_distribution
                .entry(item.category.clone())
                .or_insert(0) += 1;

            let location = item
                .location
                .as_deref()
                .map(str::trim)
                .filter(|location| !location.is_empty())
                .unwrap_or(UNSPECIFIED_LOCATION);
            *location_distribution
                .entry(location.to_string())
                .or_insert(0) += 1;

            if classified.severity_tier == SeverityTier::Expired {
                *wasted_categories.entry(item.category.clone()).or_insert(0) += 1;
                total_waste_value += item.purchase_price.unwrap_or(0.0);
            }
        }

        let shopping_suggestions = shopping_suggestions(&consumed, &category_distribution);

        Self {
            reference,
            window_days,
            total_items: active.len(),
            consumed_items: consumed.len(),
            tiers,
            expiring_soon,
            donation_eligible,
            category_distribution,
            location_distribution,
            wasted_categories,
            total_waste_value,
            shopping_suggestions,
        }
    }
}

/// Frequently consumed categories that are running low.
fn shopping_suggestions(
    consumed: &[&FoodItem],
    active_by_category: &BTreeMap<String, usize>,
) -> Vec<String> {
    let mut consumed_by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for item in consumed {
        *consumed_by_category.entry(item.category.as_str()).or_insert(0) += 1;
    }

    consumed_by_category
        .into_iter()
        .filter(|(_, count)| *count >= STAPLE_CONSUMPTION_COUNT)
        .filter(|(category, _)| {
            active_by_category.get(*category).copied().unwrap_or(0) < LOW_STOCK_COUNT
        })
        .map(|(category, _)| category.to_string())
        .collect()
}
