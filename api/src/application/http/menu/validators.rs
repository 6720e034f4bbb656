use std::str::FromStr;

use flavorly_core::domain::menu::value_objects::{DEFAULT_MENU_PAGE_LIMIT, GetMenuItemsFilter};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::http::{
    query_params::{FilterOperator, QueryParams},
    server::api_entities::api_error::ApiError,
};

const SORTABLE_FIELDS: [&str; 4] = ["id", "name", "price", "category"];

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchMenuValidator {
    /// Free-text question, e.g. "3 breakfasts, one vegan"
    #[validate(length(min = 1, max = 500, message = "q must be between 1 and 500 characters"))]
    pub q: String,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SeedMenuValidator {
    /// Clear and reseed even when the catalog is already complete
    #[serde(default)]
    pub force: bool,
}

/// Query string documentation for the listing endpoint; parsing goes
/// through `QueryParamsExtractor`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct GetMenuItemsQuery {
    pub skip: Option<u64>,
    /// 1..=1000, defaults to 1000
    pub limit: Option<u64>,
    #[serde(rename = "filter[category]")]
    pub category: Option<String>,
    #[serde(rename = "filter[name][ilike]")]
    pub name_ilike: Option<String>,
    #[serde(rename = "filter[price][gte]")]
    pub price_gte: Option<f64>,
    #[serde(rename = "filter[price][lte]")]
    pub price_lte: Option<f64>,
    /// Comma separated, prefix with '-' for descending: id, name, price, category
    pub sort: Option<String>,
}

fn parse_price(value: &str) -> Result<Decimal, ApiError> {
    Decimal::from_str(value.trim())
        .map_err(|_| ApiError::BadRequest(format!("'{}' is not a valid price", value)))
}

/// Maps generic query parameters onto the menu listing filter.
pub fn menu_items_filter(params: QueryParams) -> Result<GetMenuItemsFilter, ApiError> {
    let mut filter = GetMenuItemsFilter {
        skip: params.pagination.skip.unwrap_or(0),
        limit: params.pagination.limit.unwrap_or(DEFAULT_MENU_PAGE_LIMIT),
        ..Default::default()
    };

    for condition in params.filter.conditions {
        match (condition.field.as_str(), condition.operator) {
            ("category", FilterOperator::Eq) => filter.category = Some(condition.value),
            ("name", FilterOperator::Ilike) => filter.name_ilike = Some(condition.value),
            ("price", FilterOperator::Gte) => filter.price_gte = Some(parse_price(&condition.value)?),
            ("price", FilterOperator::Lte) => filter.price_lte = Some(parse_price(&condition.value)?),
            (field, operator) => {
                return Err(ApiError::BadRequest(format!(
                    "unsupported filter {:?} on '{}'",
                    operator, field
                )));
            }
        }
    }

    if !params.sort.is_empty() {
        if let Some(unknown) = params
            .sort
            .sorts
            .iter()
            .find(|s| !SORTABLE_FIELDS.contains(&s.field.as_str()))
        {
            return Err(ApiError::BadRequest(format!(
                "cannot sort by '{}'",
                unknown.field
            )));
        }
        filter.sort = Some(params.sort.to_sort_string());
    }

    Ok(filter)
}
