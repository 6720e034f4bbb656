use axum::extract::State;
use flavorly_core::domain::menu::{
    ports::MenuService,
    value_objects::{SearchMenuInput, SearchResult},
};

use crate::application::http::{
    menu::validators::SearchMenuValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/search",
    tag = "menu",
    summary = "Ask the menu",
    description = "Answers a free-text request using the language model. When the model is \
        unavailable or its reply cannot be read, falls back to a name and description \
        substring search and reports the failure in `answer`.",
    params(SearchMenuValidator),
    responses(
        (status = 200, body = SearchResult),
        (status = 422, description = "Query missing or longer than 500 characters")
    ),
)]
pub async fn search_menu(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<SearchMenuValidator>,
) -> Result<Response<SearchResult>, ApiError> {
    let result = state
        .service
        .search_menu(SearchMenuInput { query: query.q })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
