//! Admin GraphQL HTTP client.
//!
//! Thin reqwest wrapper around `POST /admin/api/{version}/graphql.json`.
//! Pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::AdminGraphql;
use super::types::{AdminError, GraphqlResponse};
use crate::config::AppConfig;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AdminClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl AdminClient {
    /// Build a client for the shop named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::HttpClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &AppConfig) -> Result<Self, AdminError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AdminError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.graphql_url(), access_token: config.access_token.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl AdminGraphql for AdminClient {
    async fn execute(&self, query: &str, variables: serde_json::Value) -> Result<GraphqlResponse, AdminError> {
        let body = ApiRequest { query, variables: &variables };

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AdminError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AdminError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(AdminError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    query: &'a str,
    variables: &'a serde_json::Value,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<GraphqlResponse, AdminError> {
    serde_json::from_str(json).map_err(|e| AdminError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
