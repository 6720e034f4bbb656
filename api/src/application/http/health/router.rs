use super::handlers::{__path_health, __path_readiness, health, readiness};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/ready", root_path), get(readiness))
}
