use axum::extract::{Query, State};
use flavorly_core::domain::seed::{SeedMenuInput, SeedOutcome, SeedService};

use crate::application::http::{
    menu::validators::SeedMenuValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/seed",
    tag = "menu",
    summary = "Seed the menu",
    description = "Loads the café menu dataset. An empty or partial catalog is (re)seeded; \
        a complete one is left alone unless `force` is set.",
    params(SeedMenuValidator),
    responses(
        (status = 200, body = SeedOutcome)
    ),
)]
pub async fn seed_menu(
    State(state): State<AppState>,
    Query(query): Query<SeedMenuValidator>,
) -> Result<Response<SeedOutcome>, ApiError> {
    let outcome = state
        .service
        .seed_menu(SeedMenuInput { force: query.force })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
