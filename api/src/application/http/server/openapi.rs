use crate::application::http::{
    donation::router::DonationApiDoc,
    inventory::router::{ClassifyApiDoc, InventoryApiDoc},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NourishCare Gateway API"
    ),
    paths(crate::application::http::health::health),
    nest(
        (path = "/users", api = InventoryApiDoc),
        (path = "/users", api = DonationApiDoc),
        (path = "/inventory", api = ClassifyApiDoc),
    )
)]
pub struct ApiDoc;
