use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::{DatabaseHealthStatus, HealthStatus},
        ports::{HealthCheckRepository, HealthCheckService},
    },
    menu::ports::{LLMClient, MenuItemRepository},
};

impl<M, HC, LLM> HealthCheckService for Service<M, HC, LLM>
where
    M: MenuItemRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<HealthStatus, CoreError> {
        let item_count = self.menu_item_repository.count().await?;

        Ok(HealthStatus {
            status: "healthy".to_string(),
            item_count,
        })
    }
}
