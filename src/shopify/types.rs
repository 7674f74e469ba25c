//! Admin API types: errors, GraphQL envelope, and delivery customization records.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by Admin API client operations.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The HTTP request to the Admin API failed before a response arrived.
    #[error("admin API request failed: {0}")]
    ApiRequest(String),

    /// The Admin API returned a non-success HTTP status.
    #[error("admin API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("admin API response parse failed: {0}")]
    ApiParse(String),

    /// A request payload could not be serialized.
    #[error("payload encode failed: {0}")]
    Encode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl AdminError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::Encode(_) => "E_ENCODE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether resubmitting the same request could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// GRAPHQL ENVELOPE
// =============================================================================

/// Top-level GraphQL response. `data` is left untyped so each operation can
/// decide how strictly to read it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<UserError>,
}

// =============================================================================
// USER ERRORS
// =============================================================================

/// A validation or business-rule failure reported alongside mutation data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    pub message: String,
}

/// Every user error a mutation reported, in platform order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserErrors(Vec<UserError>);

impl UserErrors {
    #[must_use]
    pub fn new(errors: Vec<UserError>) -> Self {
        Self(errors)
    }

    /// A single locally-raised error, e.g. from form validation.
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![UserError { message: message.into() }])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message of the first error, used as the headline.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|e| e.message.as_str())
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.message.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A delivery customization as listed by the Admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCustomization {
    pub id: String,
    pub title: String,
    pub enabled: bool,
}

/// Result of a mutation: ids the mutation returned plus any user errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationResult {
    pub ids: Vec<String>,
    pub user_errors: UserErrors,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
