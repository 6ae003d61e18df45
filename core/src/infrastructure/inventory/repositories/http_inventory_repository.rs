use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::domain::{
    common::{BackendConfig, entities::app_errors::CoreError},
    expiration::FoodItem,
    inventory::ports::InventoryRepository,
};

/// Fetches inventory records from the external inventory service.
#[derive(Debug, Clone)]
pub struct HttpInventoryRepository {
    base_url: Url,
    client: Client,
}

impl HttpInventoryRepository {
    pub fn new(config: BackendConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build inventory HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    /// `{base}/api/inventory/users/{user_id}/items`, with `user_id` percent-encoded.
    fn user_items_url(&self, user_id: &str) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CoreError::Invalid(format!(
                    "backend url '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "inventory", "users", user_id, "items"]);

        Ok(url)
    }
}

impl InventoryRepository for HttpInventoryRepository {
    async fn fetch_user_items(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Vec<FoodItem>, CoreError> {
        let url = self.user_items_url(user_id)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Inventory request failed: {}", e);
                CoreError::ExternalServiceError(format!("inventory service unreachable: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Inventory service error: {} - {}", status, error_text);

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::Unauthorized,
                StatusCode::NOT_FOUND => CoreError::NotFound,
                _ => CoreError::ExternalServiceError(format!(
                    "inventory service returned {}",
                    status
                )),
            });
        }

        let records = response.json::<Vec<Value>>().await.map_err(|e| {
            tracing::error!("Failed to parse inventory response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse inventory response: {}", e))
        })?;

        Ok(decode_items(records))
    }
}

/// Decodes each record on its own so one unreadable entry is skipped instead of
/// failing the whole inventory.
fn decode_items(records: Vec<Value>) -> Vec<FoodItem> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<FoodItem>(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index, "Skipping unreadable inventory record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(base_url: &str) -> HttpInventoryRepository {
        HttpInventoryRepository::new(BackendConfig {
            base_url: Url::parse(base_url).unwrap(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_user_items_url() {
        let url = repository("http://localhost:8080")
            .user_items_url("66f1a2")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/inventory/users/66f1a2/items"
        );
    }

    #[test]
    fn test_user_items_url_keeps_base_path_and_encodes_id() {
        let url = repository("https://gateway.example.com/backend/")
            .user_items_url("a b/c")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://gateway.example.com/backend/api/inventory/users/a%20b%2Fc/items"
        );
    }

    #[test]
    fn test_user_items_url_rejects_opaque_base() {
        let result = repository("mailto:pantry@example.com").user_items_url("1");
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_decode_items_skips_unreadable_records() {
        let items = decode_items(vec![
            serde_json::json!({
                "id": "1",
                "name": "Milk",
                "quantity": 1,
                "quantityUnit": "l",
                "unit": "l",
                "purchasePrice": 1.2,
                "price": 1.2,
                "expirationDate": "2025-09-19",
                "expirationStatus": "FRESH"
            }),
            serde_json::json!("not a record"),
            serde_json::json!({ "id": "3", "expirationDate": [2025, 9, 19] }),
            serde_json::json!({ "id": "4", "quantity": "2 kg" }),
        ]);

        let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(items[0].purchase_price, Some(1.2));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_external_error() {
        let result = repository("http://127.0.0.1:1")
            .fetch_user_items("1", "token")
            .await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
