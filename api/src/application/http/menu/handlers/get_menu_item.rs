use axum::extract::{Path, State};
use flavorly_core::domain::menu::{
    entities::MenuItem, ports::MenuService, value_objects::GetMenuItemInput,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "menu",
    summary = "Get menu item",
    params(
        ("item_id" = i32, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, body = MenuItem),
        (status = 404, description = "Menu item not found")
    ),
)]
pub async fn get_menu_item(
    Path(item_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<MenuItem>, ApiError> {
    let item = state
        .service
        .get_menu_item(GetMenuItemInput { item_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
