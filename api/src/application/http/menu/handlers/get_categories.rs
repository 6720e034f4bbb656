use axum::extract::State;
use flavorly_core::domain::menu::{ports::MenuService, value_objects::CategoryStats};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    tag = "menu",
    summary = "Menu categories",
    description = "Item count per category, sorted by category name.",
    responses(
        (status = 200, body = Vec<CategoryStats>)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<Vec<CategoryStats>>, ApiError> {
    let stats = state
        .service
        .get_category_stats()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
