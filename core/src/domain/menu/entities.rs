use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub allergens: Option<String>, // comma separated, e.g. "Gluten, Milk"
    pub is_halal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub dietary_tags: Option<String>, // free text, e.g. "Gluten, Celery (VG)"
    pub prep_time: Option<i32>,
    pub safety_alerts: Option<String>,
    pub may_contain: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl MenuItem {
    /// Case-insensitive substring match against name and description.
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Menu item as supplied by the seed dataset, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub dietary_tags: Option<String>,
    pub prep_time: Option<i32>,
    pub safety_alerts: Option<String>,
    pub may_contain: Option<String>,
}
