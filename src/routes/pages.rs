//! Generic page handlers driving any [`ResourcePage`].
//!
//! `GET` renders the page from a fresh fetch. `POST` runs the mutation first,
//! then fetches again so the list reflects the write, and renders with the
//! outcome. There is no submission lock; a double submit issues two mutations.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::pages::layout::render_error_page;
use crate::pages::{PageView, ResourcePage};
use crate::routes::session::AdminSession;
use crate::shopify::AdminError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Admin(#[from] AdminError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Admin(err) => {
                tracing::error!(error = %err, code = err.error_code(), retryable = err.retryable(), "admin API call failed");
                let body = render_error_page(format!("Error code: {}", err.error_code()));
                (StatusCode::BAD_GATEWAY, Html(body)).into_response()
            }
        }
    }
}

/// `GET`: load and render.
pub async fn show<P: ResourcePage>(session: AdminSession) -> Result<Html<String>, PageError> {
    let page = P::default();
    let items = page.fetch(session.admin.as_ref()).await?.unwrap_or_default();
    let draft = page.draft(None, &items);
    Ok(Html(page.render(PageView { items, draft, outcome: None })))
}

/// `POST`: run the mutation, reload, render with the outcome.
pub async fn submit<P: ResourcePage>(
    State(state): State<AppState>,
    session: AdminSession,
    Form(form): Form<P::Form>,
) -> Result<Html<String>, PageError> {
    let page = P::default();
    let outcome = page.submit(session.admin.as_ref(), &state.config, &form).await?;
    let items = page.fetch(session.admin.as_ref()).await?.unwrap_or_default();
    let draft = page.draft(Some(&form), &items);
    Ok(Html(page.render(PageView { items, draft, outcome: Some(outcome) })))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
