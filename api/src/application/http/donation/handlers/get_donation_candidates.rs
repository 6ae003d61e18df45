use axum::{
    Extension,
    extract::{Path, State},
};
use nourish_core::domain::inventory::{
    entities::ClassifiedFoodItem, ports::InventoryService,
    value_objects::GetDonationCandidatesInput,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{
    auth::BearerToken,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetDonationCandidatesResponse {
    pub data: Vec<ClassifiedFoodItem>,
}

#[utoipa::path(
    get,
    path = "/{user_id}/donations/candidates",
    tag = "donation",
    summary = "List donation candidates",
    description = "Active items that have not expired and still have stock left, in inventory order.",
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetDonationCandidatesResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    )
)]
pub async fn get_donation_candidates(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> Result<Response<GetDonationCandidatesResponse>, ApiError> {
    let items = state
        .service
        .get_donation_candidates(GetDonationCandidatesInput { user_id, token })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDonationCandidatesResponse { data: items }))
}
