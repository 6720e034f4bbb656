use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    menu::{
        entities::MenuItem,
        ports::{LLMClient, MenuItemRepository, MenuService},
        resolver::resolve_menu_query,
        value_objects::{
            CategoryStats, GetMenuItemInput, GetMenuItemsFilter, MAX_MENU_PAGE_LIMIT,
            SearchMenuInput, SearchResult,
        },
    },
};

impl<M, HC, LLM> MenuService for Service<M, HC, LLM>
where
    M: MenuItemRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_menu_items(&self, filter: GetMenuItemsFilter) -> Result<Vec<MenuItem>, CoreError> {
        if filter.limit == 0 || filter.limit > MAX_MENU_PAGE_LIMIT {
            return Err(CoreError::InvalidPagination(format!(
                "limit must be between 1 and {}",
                MAX_MENU_PAGE_LIMIT
            )));
        }

        if let (Some(min), Some(max)) = (filter.price_gte, filter.price_lte)
            && min > max
        {
            return Err(CoreError::Invalid);
        }

        self.menu_item_repository.find_page(filter).await
    }

    async fn get_menu_item(&self, input: GetMenuItemInput) -> Result<MenuItem, CoreError> {
        self.menu_item_repository
            .find_by_id(input.item_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn search_menu(&self, input: SearchMenuInput) -> Result<SearchResult, CoreError> {
        // 1. Snapshot the catalog for this request
        let snapshot = self.menu_item_repository.find_all().await?;

        // 2. Resolve through the language model, degrading to a local search
        let result = resolve_menu_query(
            &self.llm_client,
            &self.menu_item_repository,
            &input.query,
            &snapshot,
            self.llm_timeout,
        )
        .await;

        info!(
            source = ?result.source,
            matched = result.items.len(),
            catalog = snapshot.len(),
            "menu search resolved"
        );

        Ok(result)
    }

    async fn get_category_stats(&self) -> Result<Vec<CategoryStats>, CoreError> {
        self.menu_item_repository.category_stats().await
    }
}
