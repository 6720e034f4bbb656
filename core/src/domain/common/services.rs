use std::time::Duration;

use crate::domain::{
    health::ports::HealthCheckRepository, menu::ports::LLMClient,
    menu::ports::MenuItemRepository,
};

/// Dependency container behind every domain service trait.
#[derive(Clone)]
pub struct Service<M, HC, LLM>
where
    M: MenuItemRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub(crate) menu_item_repository: M,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
    pub(crate) llm_timeout: Duration,
}

impl<M, HC, LLM> Service<M, HC, LLM>
where
    M: MenuItemRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub fn new(
        menu_item_repository: M,
        health_check_repository: HC,
        llm_client: LLM,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            menu_item_repository,
            health_check_repository,
            llm_client,
            llm_timeout,
        }
    }
}
