use crate::{
    domain::common::{FlavorlyConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::repository::PostgresHealthCheckRepository,
        llm::gemini_client::GeminiLLMClient,
        menu::repositories::menu_item_repository::PostgresMenuItemRepository,
    },
};

pub type FlavorlyService =
    Service<PostgresMenuItemRepository, PostgresHealthCheckRepository, GeminiLLMClient>;

/// Wires the Postgres repositories and the Gemini client into a [`FlavorlyService`].
pub async fn create_service(config: FlavorlyConfig) -> Result<FlavorlyService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let menu_item_repository = PostgresMenuItemRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
        config.llm.gemini_base_url.clone(),
    );

    Ok(Service::new(
        menu_item_repository,
        health_check_repository,
        llm_client,
        config.llm.timeout(),
    ))
}
