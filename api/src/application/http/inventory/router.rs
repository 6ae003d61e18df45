use super::handlers::{
    classify_items::{__path_classify_items, classify_items},
    get_inventory_overview::{__path_get_inventory_overview, get_inventory_overview},
    get_use_soon::{__path_get_use_soon, get_use_soon},
    list_inventory::{__path_list_inventory, list_inventory},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_inventory, get_inventory_overview, get_use_soon))]
pub struct InventoryApiDoc;

#[derive(OpenApi)]
#[openapi(paths(classify_items))]
pub struct ClassifyApiDoc;

pub fn inventory_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let user_routes = Router::new()
        .route(
            &format!("{root_path}/users/{{user_id}}/inventory"),
            get(list_inventory),
        )
        .route(
            &format!("{root_path}/users/{{user_id}}/inventory/overview"),
            get(get_inventory_overview),
        )
        .route(
            &format!("{root_path}/users/{{user_id}}/inventory/use-soon"),
            get(get_use_soon),
        )
        .layer(middleware::from_fn(auth));

    Router::new()
        .route(
            &format!("{root_path}/inventory/classify"),
            post(classify_items),
        )
        .merge(user_routes)
}
