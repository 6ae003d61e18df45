use axum::{
    Extension,
    extract::{Path, State},
};
use nourish_core::domain::inventory::{
    entities::ClassifiedFoodItem, ports::InventoryService, value_objects::GetUseSoonInput,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::get_inventory_overview::WindowParams;
use crate::application::{
    auth::BearerToken,
    http::{
        query_extractor::ApiQuery,
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
pub struct GetUseSoonResponse {
    pub data: Vec<ClassifiedFoodItem>,
}

#[utoipa::path(
    get,
    path = "/{user_id}/inventory/use-soon",
    tag = "inventory",
    summary = "List items to use soon",
    description = "Active items that expire today or within the window, soonest first.",
    params(
        ("user_id" = String, Path, description = "User id"),
        WindowParams,
    ),
    responses(
        (status = 200, body = GetUseSoonResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn get_use_soon(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
    ApiQuery(params): ApiQuery<WindowParams>,
) -> Result<Response<GetUseSoonResponse>, ApiError> {
    let items = state
        .service
        .get_use_soon(GetUseSoonInput {
            user_id,
            token,
            window_days: params.window,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUseSoonResponse { data: items }))
}
