//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two admin pages, each answering `GET` (render) and `POST` (form submit),
//! plus a health probe. Every request is traced by `TraceLayer`.

pub mod pages;
pub mod session;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::pages::{ConfigurationPage, RegistrationPage, ResourcePage};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_registration))
        .route(
            RegistrationPage::PATH,
            get(pages::show::<RegistrationPage>).post(pages::submit::<RegistrationPage>),
        )
        .route(
            ConfigurationPage::PATH,
            get(pages::show::<ConfigurationPage>).post(pages::submit::<ConfigurationPage>),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_registration() -> Redirect {
    Redirect::temporary(RegistrationPage::PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
