use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuItem, NewMenuItem},
        value_objects::{
            CategoryStats, GetMenuItemInput, GetMenuItemsFilter, SearchMenuInput, SearchResult,
        },
    },
};

/// Read access to the menu catalog plus the bulk write used by seeding.
#[cfg_attr(test, mockall::automock)]
pub trait MenuItemRepository: Send + Sync {
    /// Every item, ordered by id.
    fn find_all(&self) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    /// Items whose id is in `ids`, one row per matching id, ordered by id.
    fn find_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn find_by_id(
        &self,
        item_id: i32,
    ) -> impl Future<Output = Result<Option<MenuItem>, CoreError>> + Send;

    fn find_page(
        &self,
        filter: GetMenuItemsFilter,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn category_stats(&self) -> impl Future<Output = Result<Vec<CategoryStats>, CoreError>> + Send;

    /// Clears the catalog (ids restart at 1) and inserts `items` in order.
    /// Returns the number of inserted rows.
    fn replace_all(
        &self,
        items: Vec<NewMenuItem>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for menu business logic
#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    fn get_menu_items(
        &self,
        filter: GetMenuItemsFilter,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn get_menu_item(
        &self,
        input: GetMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    /// Answers a free-text question about the menu.
    ///
    /// Language-model failures never surface here: they degrade to a
    /// substring search. Only a failure to load the catalog itself is an error.
    fn search_menu(
        &self,
        input: SearchMenuInput,
    ) -> impl Future<Output = Result<SearchResult, CoreError>> + Send;

    fn get_category_stats(
        &self,
    ) -> impl Future<Output = Result<Vec<CategoryStats>, CoreError>> + Send;
}
