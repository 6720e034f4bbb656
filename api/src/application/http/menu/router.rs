use super::handlers::get_categories::{__path_get_categories, get_categories};
use super::handlers::get_menu_item::{__path_get_menu_item, get_menu_item};
use super::handlers::get_menu_items::{__path_get_menu_items, get_menu_items};
use super::handlers::search_menu::{__path_search_menu, search_menu};
use super::handlers::seed_menu::{__path_seed_menu, seed_menu};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_menu_items, get_menu_item, search_menu, get_categories, seed_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/menu", root_path), get(get_menu_items))
        .route(&format!("{}/menu/search", root_path), get(search_menu))
        .route(&format!("{}/menu/categories", root_path), get(get_categories))
        .route(&format!("{}/menu/seed", root_path), post(seed_menu))
        .route(&format!("{}/menu/{{item_id}}", root_path), get(get_menu_item))
}
