use nourish_core::domain::{
    common::value_objects::{DEFAULT_LIMIT, MAX_LIMIT, OffsetLimit},
    inventory::value_objects::{InventorySort, InventorySortField},
};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Sort direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort on a single field, written as `field` or `-field` for descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Blank input means no sort.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let spec = match s.strip_prefix('-') {
            Some(stripped) => SortSpec {
                field: stripped.to_string(),
                direction: SortDirection::Desc,
            },
            None => SortSpec {
                field: s.to_string(),
                direction: SortDirection::Asc,
            },
        };
        Some(spec)
    }

    pub fn to_inventory_sort(&self) -> Result<InventorySort, ApiError> {
        let field = self.field.parse::<InventorySortField>()?;

        Ok(InventorySort {
            field,
            descending: self.direction == SortDirection::Desc,
        })
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

impl From<PaginationParams> for OffsetLimit {
    fn from(params: PaginationParams) -> Self {
        OffsetLimit::new(params.offset, params.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parse() {
        let spec = SortSpec::parse(" -days ").unwrap();
        assert_eq!(spec.field, "days");
        assert_eq!(spec.direction, SortDirection::Desc);

        let spec = SortSpec::parse("name").unwrap();
        assert_eq!(spec.direction, SortDirection::Asc);

        assert_eq!(SortSpec::parse("  "), None);
    }

    #[test]
    fn test_inventory_sort() {
        let sort = SortSpec::parse("-days")
            .unwrap()
            .to_inventory_sort()
            .unwrap();
        assert_eq!(sort.field, InventorySortField::DaysUntilExpiration);
        assert!(sort.descending);

        for invalid in ["price", "days,name"] {
            assert!(matches!(
                SortSpec::parse(invalid).unwrap().to_inventory_sort(),
                Err(ApiError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn test_pagination_clamps() {
        let params = PaginationParams::new(Some(10), Some(50));
        assert_eq!(params.offset, 10);
        assert_eq!(params.limit, 50);

        let params = PaginationParams::new(Some(-5), Some(1000));
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 100);

        let params = PaginationParams::new(None, None);
        assert_eq!(OffsetLimit::from(params), OffsetLimit::default());
    }
}
