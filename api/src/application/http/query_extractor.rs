use axum::{extract::FromRequestParts, http::request::Parts};
use std::collections::HashMap;

use super::{query_params::QueryParams, server::api_entities::api_error::ApiError};

/// Extractor for query parameters that supports filter, sort, and pagination
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(query_params): QueryParamsExtractor,
/// ) -> Result<Response<Vec<MenuItem>>, ApiError> {
///     // Use query_params.filter, query_params.sort, query_params.pagination
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("invalid query string: {}", e)))?;

        let query_params = QueryParams::from_query_map(&query_map).map_err(ApiError::BadRequest)?;

        Ok(QueryParamsExtractor(query_params))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    use super::*;
    use crate::application::http::query_params::FilterOperator;

    async fn echo(QueryParamsExtractor(params): QueryParamsExtractor) -> String {
        let filters: Vec<String> = params
            .filter
            .conditions
            .iter()
            .map(|c| format!("{}:{:?}:{}", c.field, c.operator, c.value))
            .collect();
        format!(
            "{}|{}|{:?}",
            filters.join(";"),
            params.sort.to_sort_string(),
            params.pagination.limit
        )
    }

    #[tokio::test]
    async fn test_extracts_bracketed_filters() {
        let server = TestServer::new(Router::new().route("/menu", get(echo))).unwrap();

        let response = server
            .get("/menu")
            .add_query_param("filter[name][ilike]", "toast")
            .add_query_param("sort", "-price")
            .add_query_param("limit", "5")
            .await;

        response.assert_status_ok();
        response.assert_text(format!(
            "name:{:?}:toast|-price|Some(5)",
            FilterOperator::Ilike
        ));
    }

    #[tokio::test]
    async fn test_rejects_bad_limit() {
        let server = TestServer::new(Router::new().route("/menu", get(echo))).unwrap();

        let response = server.get("/menu").add_query_param("limit", "lots").await;

        response.assert_status_bad_request();
    }
}
