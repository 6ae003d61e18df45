use axum::{
    Extension,
    extract::{Path, State},
};
use nourish_core::domain::inventory::{
    entities::ClassifiedFoodItem, ports::InventoryService, value_objects::ListInventoryInput,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{
    auth::BearerToken,
    http::{
        query_extractor::{InventoryQueryExtractor, InventoryQueryParams},
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ListInventoryResponse {
    pub data: Vec<ClassifiedFoodItem>,
    pub offset: i64,
    pub limit: i64,
    pub count: i64,
}

#[utoipa::path(
    get,
    path = "/{user_id}/inventory",
    tag = "inventory",
    summary = "List classified inventory",
    description = "Lists the user's active items with their expiration countdown, severity tier and donation eligibility. Supports filtering, sorting and pagination.",
    params(
        ("user_id" = String, Path, description = "User id"),
        InventoryQueryParams,
    ),
    responses(
        (status = 200, body = ListInventoryResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn list_inventory(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
    InventoryQueryExtractor(query): InventoryQueryExtractor,
) -> Result<Response<ListInventoryResponse>, ApiError> {
    let page = state
        .service
        .list_items(ListInventoryInput {
            user_id,
            token,
            query,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListInventoryResponse {
        data: page.items,
        offset: page.offset,
        limit: page.limit,
        count: page.count,
    }))
}
