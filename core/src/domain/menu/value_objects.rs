use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::MenuItem;

pub const DEFAULT_MENU_PAGE_LIMIT: u64 = 1000;
pub const MAX_MENU_PAGE_LIMIT: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMenuItemsFilter {
    pub skip: u64,
    pub limit: u64,
    pub category: Option<String>,
    pub name_ilike: Option<String>,
    pub price_gte: Option<Decimal>,
    pub price_lte: Option<Decimal>,
    /// Sort string like "category,-price"
    pub sort: Option<String>,
}

impl Default for GetMenuItemsFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_MENU_PAGE_LIMIT,
            category: None,
            name_ilike: None,
            price_gte: None,
            price_lte: None,
            sort: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetMenuItemInput {
    pub item_id: i32,
}

#[derive(Debug, Clone)]
pub struct SearchMenuInput {
    pub query: String,
}

/// Which path produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The model replied with an `{"ids": [...], "answer": "..."}` object.
    Model,
    /// The model replied with a bare array of ids.
    IdList,
    /// The model path failed and a substring search was used instead.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionLine {
    pub item_id: i32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Catalog-priced view of what the model selected.
///
/// Quantities come from how often an id repeats in the model's `ids`; a
/// reply listing each item once yields quantity 1 whatever `answer` says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedSelection {
    pub lines: Vec<SelectionLine>,
    pub total: Decimal,
}

/// `selection` trusts id repetition in the model reply while `answer` is passed
/// through untouched, so the two can disagree on quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    pub items: Vec<MenuItem>,
    pub answer: String,
    pub source: ResolutionSource,
    pub selection: ResolvedSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryStats {
    pub category: Option<String>,
    pub item_count: i64,
}
