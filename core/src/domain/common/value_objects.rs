use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OffsetLimit {
    pub offset: i64,
    pub limit: i64,
}

impl Default for OffsetLimit {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl OffsetLimit {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.offset < 0 || self.limit <= 0 || self.limit > MAX_LIMIT {
            return Err(CoreError::InvalidPagination);
        }
        Ok(())
    }

    /// Cuts one page out of `items`, reporting the unpaginated count.
    pub fn paginate<T>(&self, items: Vec<T>) -> Paginated<T> {
        let count = items.len() as i64;
        let items = items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .collect();

        Paginated {
            items,
            offset: self.offset,
            limit: self.limit,
            count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub offset: i64,
    pub limit: i64,
    pub count: i64,
}

impl<T> Paginated<T> {
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            count: self.count,
        }
    }
}
