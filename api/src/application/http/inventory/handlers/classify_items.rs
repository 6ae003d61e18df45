use axum::extract::State;
use nourish_core::domain::{
    expiration::start_of_day,
    inventory::{
        ports::InventoryService,
        value_objects::{ClassifyItemsInput, ClassifyItemsOutput},
    },
};

use crate::application::http::{
    inventory::validators::ClassifyItemsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/classify",
    tag = "inventory",
    summary = "Classify items",
    description = "Computes countdown, severity tier and donation eligibility for the posted items without contacting the inventory service. Items keep their input order.",
    request_body = ClassifyItemsValidator,
    responses(
        (status = 200, body = ClassifyItemsOutput),
        (status = 400, body = ApiErrorResponse)
    )
)]
pub async fn classify_items(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ClassifyItemsValidator>,
) -> Result<Response<ClassifyItemsOutput>, ApiError> {
    let output = state.service.classify_items(ClassifyItemsInput {
        items: payload.items,
        reference: payload.reference_date.map(start_of_day),
    });

    Ok(Response::OK(output))
}
