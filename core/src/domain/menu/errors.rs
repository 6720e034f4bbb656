use std::time::Duration;

use thiserror::Error;

/// Reasons the language-model path of a menu search gave up.
///
/// These never reach the caller as errors: the resolver turns them into a
/// fallback result whose answer carries the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionFailure {
    #[error("language model unavailable: {0}")]
    GatewayUnavailable(String),

    #[error("language model timed out after {0:?}")]
    GatewayTimeout(Duration),

    #[error("malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("menu lookup failed: {0}")]
    CatalogLookup(String),
}
