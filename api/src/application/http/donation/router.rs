use super::handlers::get_donation_candidates::{
    __path_get_donation_candidates, get_donation_candidates,
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_donation_candidates))]
pub struct DonationApiDoc;

pub fn donation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/users/{{user_id}}/donations/candidates",
                state.args.server.root_path
            ),
            get(get_donation_candidates),
        )
        .layer(middleware::from_fn(auth))
}
