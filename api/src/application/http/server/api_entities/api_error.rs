use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use flavorly_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::ValidationError(_) => "E_VALIDATION",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Menu item not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("Invalid input".to_string()),
            CoreError::InvalidPagination(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(message) => ApiError::ServiceUnavailable(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// Query string extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, max = 5))]
        q: String,
    }

    async fn probe(ValidateQuery(probe): ValidateQuery<Probe>) -> String {
        probe.q
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/probe", get(probe))).unwrap()
    }

    #[test]
    fn test_core_errors_map_to_status() {
        assert_eq!(
            ApiError::from(CoreError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidPagination("limit".into())),
            ApiError::BadRequest("limit".into())
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("down".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(CoreError::InternalServerError).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_validate_query_accepts_valid_input() {
        let response = server().get("/probe").add_query_param("q", "tea").await;

        response.assert_status_ok();
        response.assert_text("tea");
    }

    #[tokio::test]
    async fn test_validate_query_rejects_missing_param() {
        let response = server().get("/probe").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_validate_query_rejects_rule_violation() {
        let response = server().get("/probe").add_query_param("q", "").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_VALIDATION");
    }
}
