//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after start-up: the Admin API capability and process config.
//! Nothing about a page visit is stored here.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::shopify::AdminGraphql;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub admin: Arc<dyn AdminGraphql>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(admin: Arc<dyn AdminGraphql>, config: AppConfig) -> Self {
        Self { admin, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
