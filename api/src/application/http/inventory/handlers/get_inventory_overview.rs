use axum::{
    Extension,
    extract::{Path, State},
};
use nourish_core::domain::inventory::{
    ports::InventoryService,
    value_objects::{GetOverviewInput, InventoryOverview},
};
use serde::Deserialize;
use utoipa::IntoParams;

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

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowParams {
    /// Days ahead that count as "expiring soon", 0 to 365. Defaults to 3.
    pub window: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/{user_id}/inventory/overview",
    tag = "inventory",
    summary = "Get inventory overview",
    description = "Dashboard aggregates: severity tier counts, items expiring soon, donation candidates, category and location distribution, waste and shopping suggestions.",
    params(
        ("user_id" = String, Path, description = "User id"),
        WindowParams,
    ),
    responses(
        (status = 200, body = InventoryOverview),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn get_inventory_overview(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
    ApiQuery(params): ApiQuery<WindowParams>,
) -> Result<Response<InventoryOverview>, ApiError> {
    let overview = state
        .service
        .get_overview(GetOverviewInput {
            user_id,
            token,
            window_days: params.window,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(overview))
}
