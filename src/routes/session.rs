//! Admin session extractor: hands each request its Admin API capability.

use std::sync::Arc;

use axum::extract::{FromRef, Query};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::config::normalize_shop_domain;
use crate::shopify::AdminGraphql;
use crate::state::AppState;

#[derive(Deserialize)]
struct ShopQuery {
    shop: Option<String>,
}

/// Authenticated Admin API access for the current request.
/// Use as a handler parameter instead of reading `AppState::admin` directly.
pub struct AdminSession {
    pub admin: Arc<dyn AdminGraphql>,
}

impl<S> axum::extract::FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Embedded admin loads carry `?shop=`; it must name the shop our token belongs to.
        let requested = Query::<ShopQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.shop);
        if !shop_allowed(requested.as_deref(), &app_state.config.shop_domain) {
            tracing::warn!(shop = ?requested, "rejecting request for a different shop");
            return Err(StatusCode::FORBIDDEN);
        }

        Ok(Self { admin: app_state.admin })
    }
}

/// `true` when no shop (or a blank one) was requested, or it matches `configured`.
pub(crate) fn shop_allowed(requested: Option<&str>, configured: &str) -> bool {
    match requested.map(str::trim).filter(|shop| !shop.is_empty()) {
        Some(shop) => normalize_shop_domain(shop) == configured,
        None => true,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
