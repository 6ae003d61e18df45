use tracing::{debug, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, value_objects::Paginated},
    expiration::{FoodItem, classify, eligible_for_donation, is_expiring_within},
    inventory::{
        entities::ClassifiedFoodItem,
        ports::{Clock, InventoryRepository, InventoryService},
        value_objects::{
            ClassifyItemsInput, ClassifyItemsOutput, GetDonationCandidatesInput,
            GetOverviewInput, GetUseSoonInput, InventoryOverview, InventorySort,
            InventorySortField, ListInventoryInput, resolve_window,
        },
    },
};

impl<IR, C> Service<IR, C>
where
    IR: InventoryRepository,
    C: Clock,
{
    async fn fetch_items(&self, user_id: &str, token: &str) -> Result<Vec<FoodItem>, CoreError> {
        let items = self
            .inventory_repository
            .fetch_user_items(user_id, token)
            .await?;

        let malformed = items
            .iter()
            .filter(|item| item.expiration_date.date().is_none())
            .count();
        if malformed > 0 {
            warn!(
                user_id,
                malformed, "inventory contains items with unparseable expiration dates"
            );
        }
        debug!(user_id, count = items.len(), "fetched inventory");

        Ok(items)
    }
}

impl<IR, C> InventoryService for Service<IR, C>
where
    IR: InventoryRepository,
    C: Clock,
{
    async fn get_overview(&self, input: GetOverviewInput) -> Result<InventoryOverview, CoreError> {
        let window_days = resolve_window(input.window_days)?;
        let items = self.fetch_items(&input.user_id, &input.token).await?;

        Ok(InventoryOverview::from_items(
            &items,
            self.clock.now(),
            window_days,
        ))
    }

    async fn list_items(
        &self,
        input: ListInventoryInput,
    ) -> Result<Paginated<ClassifiedFoodItem>, CoreError> {
        let items = self.fetch_items(&input.user_id, &input.token).await?;

        input.query.apply(&items, self.clock.now())
    }

    async fn get_use_soon(
        &self,
        input: GetUseSoonInput,
    ) -> Result<Vec<ClassifiedFoodItem>, CoreError> {
        let window_days = resolve_window(input.window_days)?;
        let items = self.fetch_items(&input.user_id, &input.token).await?;

        let active = items.iter().filter(|item| !item.is_consumed);
        let mut soon: Vec<_> = classify(active, self.clock.now())
            .filter(|classified| is_expiring_within(classified.days_until_expiration, window_days))
            .collect();

        InventorySort {
            field: InventorySortField::DaysUntilExpiration,
            descending: false,
        }
        .sort(&mut soon);

        Ok(soon.into_iter().map(ClassifiedFoodItem::from).collect())
    }

    async fn get_donation_candidates(
        &self,
        input: GetDonationCandidatesInput,
    ) -> Result<Vec<ClassifiedFoodItem>, CoreError> {
        let items = self.fetch_items(&input.user_id, &input.token).await?;

        let candidates: Vec<ClassifiedFoodItem> = eligible_for_donation(
            items.iter().filter(|item| !item.is_consumed),
            self.clock.now(),
        )
        .map(ClassifiedFoodItem::from)
        .collect();

        debug!(
            user_id = input.user_id.as_str(),
            candidates = candidates.len(),
            "selected donation candidates"
        );

        Ok(candidates)
    }

    fn classify_items(&self, input: ClassifyItemsInput) -> ClassifyItemsOutput {
        let reference = input.reference.unwrap_or_else(|| self.clock.now());

        ClassifyItemsOutput {
            reference,
            items: classify(&input.items, reference)
                .map(ClassifiedFoodItem::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::domain::{
        common::value_objects::OffsetLimit,
        expiration::{Quantity, SeverityTier},
        inventory::{ports::MockClock, value_objects::InventoryQuery},
    };

    struct FakeInventoryRepository {
        items: Vec<FoodItem>,
        failure: Option<CoreError>,
    }

    impl FakeInventoryRepository {
        fn with_items(items: Vec<FoodItem>) -> Self {
            Self {
                items,
                failure: None,
            }
        }

        fn failing(error: CoreError) -> Self {
            Self {
                items: Vec::new(),
                failure: Some(error),
            }
        }
    }

    impl InventoryRepository for FakeInventoryRepository {
        async fn fetch_user_items(
            &self,
            user_id: &str,
            token: &str,
        ) -> Result<Vec<FoodItem>, CoreError> {
            assert_eq!(user_id, "user-1");
            assert_eq!(token, "token-1");

            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(self.items.clone()),
            }
        }
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 15, 10, 0, 0).unwrap()
    }

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(reference());
        clock
    }

    fn item(id: &str, days: i64, quantity: Quantity) -> FoodItem {
        let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap() + Duration::days(days);
        FoodItem::new(id, format!("item-{id}"), "Vegetables", quantity, date)
    }

    fn pieces(value: f64) -> Quantity {
        Quantity::Numeric {
            value,
            unit: Some("pieces".to_string()),
        }
    }

    fn pantry() -> Vec<FoodItem> {
        let mut consumed = item("consumed", 4, pieces(2.0));
        consumed.is_consumed = true;

        vec![
            item("fresh", 9, pieces(2.0)),
            item("today", 0, pieces(1.0)),
            item("gone", -3, pieces(5.0)),
            item("empty", 2, pieces(0.0)),
            item("two-days", 2, Quantity::Textual {
                raw: "2 kg".to_string(),
                unit: None,
            }),
            consumed,
        ]
    }

    fn service(repository: FakeInventoryRepository) -> Service<FakeInventoryRepository, MockClock> {
        Service::new(repository, clock())
    }

    fn ids(items: &[ClassifiedFoodItem]) -> Vec<&str> {
        items.iter().map(|c| c.item.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_get_overview() {
        let service = service(FakeInventoryRepository::with_items(pantry()));

        let overview = service
            .get_overview(GetOverviewInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
                window_days: None,
            })
            .await
            .unwrap();

        assert_eq!(overview.reference, reference());
        assert_eq!(overview.total_items, 5);
        assert_eq!(overview.consumed_items, 1);
        assert_eq!(overview.tiers.fresh, 1);
        assert_eq!(overview.tiers.warning, 2);
        assert_eq!(overview.tiers.critical, 1);
        assert_eq!(overview.tiers.expired, 1);
        assert_eq!(overview.expiring_soon, 3);
        assert_eq!(overview.donation_eligible, 3);
    }

    #[tokio::test]
    async fn test_get_overview_rejects_negative_window() {
        let service = service(FakeInventoryRepository::with_items(pantry()));

        let result = service
            .get_overview(GetOverviewInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
                window_days: Some(-2),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_list_items() {
        let service = service(FakeInventoryRepository::with_items(pantry()));

        let page = service
            .list_items(ListInventoryInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
                query: InventoryQuery {
                    tier: Some(SeverityTier::Warning),
                    pagination: OffsetLimit::new(0, 10),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(page.count, 2);
        assert_eq!(ids(&page.items), vec!["empty", "two-days"]);
        assert_eq!(page.items[0].days_until_expiration, Some(2));
        assert_eq!(page.items[0].badge_label, "2 days left");
    }

    #[tokio::test]
    async fn test_list_items_rejects_invalid_pagination() {
        let service = service(FakeInventoryRepository::with_items(pantry()));

        let result = service
            .list_items(ListInventoryInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
                query: InventoryQuery {
                    pagination: OffsetLimit::new(-1, 10),
                    ..Default::default()
                },
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidPagination));
    }

    #[tokio::test]
    async fn test_get_use_soon_sorted_by_urgency() {
        let service = service(FakeInventoryRepository::with_items(pantry()));

        let soon = service
            .get_use_soon(GetUseSoonInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
                window_days: Some(3),
            })
            .await
            .unwrap();

        assert_eq!(ids(&soon), vec!["today", "empty", "two-days"]);
    }

    #[tokio::test]
    async fn test_get_donation_candidates() {
        let service = service(FakeInventoryRepository::with_items(pantry()));

        let candidates = service
            .get_donation_candidates(GetDonationCandidatesInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(ids(&candidates), vec!["fresh", "today", "two-days"]);
        assert!(candidates.iter().all(|c| c.donation_eligible));
        assert!(
            candidates
                .iter()
                .all(|c| c.severity_tier != SeverityTier::Expired)
        );
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let service = service(FakeInventoryRepository::failing(
            CoreError::ExternalServiceError("connection refused".to_string()),
        ));

        let result = service
            .get_donation_candidates(GetDonationCandidatesInput {
                user_id: "user-1".to_string(),
                token: "token-1".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError(
                "connection refused".to_string()
            ))
        );
    }

    #[test]
    fn test_classify_items_uses_given_reference() {
        let mut clock = MockClock::new();
        clock.expect_now().never();
        let service = Service::new(FakeInventoryRepository::with_items(Vec::new()), clock);

        let reference = Utc.with_ymd_and_hms(2025, 9, 10, 0, 0, 0).unwrap();
        let output = service.classify_items(ClassifyItemsInput {
            items: pantry(),
            reference: Some(reference),
        });

        assert_eq!(output.reference, reference);
        assert_eq!(output.items.len(), pantry().len());
        assert_eq!(output.items[2].item.id, "gone");
        assert_eq!(output.items[2].days_until_expiration, Some(2));
        assert_eq!(output.items[2].severity_tier, SeverityTier::Warning);
    }

    #[test]
    fn test_classify_items_falls_back_to_clock() {
        let service = service(FakeInventoryRepository::with_items(Vec::new()));

        let output = service.classify_items(ClassifyItemsInput {
            items: Vec::new(),
            reference: None,
        });

        assert_eq!(output.reference, reference());
        assert!(output.items.is_empty());
    }
}
