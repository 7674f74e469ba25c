//! Shopify Admin API: GraphQL capability and delivery customization operations.
//!
//! DESIGN
//! ======
//! Page code never reaches for an ambient client. Every read and write takes
//! an `&dyn AdminGraphql`, which the session layer resolves per request.
//! `AdminClient` is the reqwest-backed implementation; tests substitute a mock.

pub mod client;
pub mod delivery;
pub mod types;

pub use client::AdminClient;
pub use types::{AdminError, DeliveryCustomization, GraphqlResponse, MutationResult, UserErrors};

// =============================================================================
// ADMIN GRAPHQL TRAIT
// =============================================================================

/// Authenticated access to the Admin GraphQL endpoint. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AdminGraphql: Send + Sync {
    /// Execute one GraphQL document with the given variables.
    ///
    /// # Errors
    ///
    /// Returns an [`AdminError`] on transport failure, a non-success HTTP
    /// status, or a body that is not a GraphQL response.
    async fn execute(&self, query: &str, variables: serde_json::Value) -> Result<GraphqlResponse, AdminError>;
}

// =============================================================================
// TEST HELPERS
// =============================================================================
