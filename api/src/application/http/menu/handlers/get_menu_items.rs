use axum::extract::State;
use flavorly_core::domain::menu::{entities::MenuItem, ports::MenuService};

use crate::application::http::{
    menu::validators::{GetMenuItemsQuery, menu_items_filter},
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "List menu items",
    description = "Lists menu items with their ingredients, ordered by id unless a sort is given.",
    params(GetMenuItemsQuery),
    responses(
        (status = 200, body = Vec<MenuItem>),
        (status = 400, description = "Invalid filter, sort or pagination")
    )
)]
pub async fn get_menu_items(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<Vec<MenuItem>>, ApiError> {
    let filter = menu_items_filter(query_params)?;

    let items = state
        .service
        .get_menu_items(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(items))
}
