use crate::application::http::{health::router::HealthApiDoc, menu::router::MenuApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flavorly API",
        description = "Café menu catalog with natural-language search"
    ),
    nest(
        (path = "/menu", api = MenuApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
