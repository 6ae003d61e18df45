use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use nourish_core::domain::{expiration::SeverityTier, inventory::value_objects::InventoryQuery};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::IntoParams;

use super::{
    query_params::{PaginationParams, SortSpec},
    server::api_entities::api_error::ApiError,
};

/// Raw listing parameters as they appear on the query string.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryQueryParams {
    /// Exact category match, case-insensitive
    pub category: Option<String>,
    /// Substring of the item name, case-insensitive
    pub search: Option<String>,
    /// One of `fresh`, `warning`, `critical`, `expired`
    pub tier: Option<String>,
    /// `days`, `name` or `category`, prefixed with `-` for descending
    pub sort: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl TryFrom<InventoryQueryParams> for InventoryQuery {
    type Error = ApiError;

    fn try_from(params: InventoryQueryParams) -> Result<Self, Self::Error> {
        let tier = params
            .tier
            .as_deref()
            .map(str::parse::<SeverityTier>)
            .transpose()?;

        let sort = params
            .sort
            .as_deref()
            .and_then(SortSpec::parse)
            .map(|spec| spec.to_inventory_sort())
            .transpose()?;

        Ok(InventoryQuery {
            category: params.category.filter(|c| !c.trim().is_empty()),
            search: params.search,
            tier,
            sort,
            pagination: PaginationParams::new(params.offset, params.limit).into(),
        })
    }
}

/// [`Query`] whose rejection is rendered as an [`ApiError`] body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

/// Extractor for inventory listing filters, sort and pagination
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     InventoryQueryExtractor(query): InventoryQueryExtractor,
/// ) -> Result<Response, ApiError> {
///     // Use query.category, query.tier, query.sort, query.pagination
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InventoryQueryExtractor(pub InventoryQuery);

impl<S> FromRequestParts<S> for InventoryQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiQuery(params) =
            ApiQuery::<InventoryQueryParams>::from_request_parts(parts, state).await?;

        Ok(InventoryQueryExtractor(InventoryQuery::try_from(params)?))
    }
}

#[cfg(test)]
mod tests {
    use nourish_core::domain::inventory::value_objects::InventorySortField;

    use super::*;

    #[test]
    fn test_params_into_query() {
        let query = InventoryQuery::try_from(InventoryQueryParams {
            category: Some("Dairy".to_string()),
            tier: Some("critical".to_string()),
            sort: Some("-name".to_string()),
            limit: Some(500),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(query.category.as_deref(), Some("Dairy"));
        assert_eq!(query.tier, Some(SeverityTier::Critical));
        let sort = query.sort.unwrap();
        assert_eq!(sort.field, InventorySortField::Name);
        assert!(sort.descending);
        assert_eq!(query.pagination.limit, 100);
    }

    #[test]
    fn test_blank_category_is_ignored() {
        let query = InventoryQuery::try_from(InventoryQueryParams {
            category: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(query, InventoryQuery::default());
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let result = InventoryQuery::try_from(InventoryQueryParams {
            tier: Some("stale".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
