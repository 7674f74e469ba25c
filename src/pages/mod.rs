//! Admin pages: the shared "resource list + mutation form" shape.
//!
//! DESIGN
//! ======
//! Both pages follow one cycle: fetch the resource list, render it with a
//! form, accept a submission, run one mutation, then render again from a
//! fresh fetch with the mutation outcome. `ResourcePage` captures that cycle;
//! the generic handlers in `routes::pages` drive it.
//!
//! Draft form state is rebuilt on every render. Free-text fields always come
//! back empty, which is also what happens after a failed submission.

pub mod configuration;
pub mod layout;
pub mod registration;

use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::shopify::{AdminError, AdminGraphql, MutationResult, UserErrors};

pub use configuration::ConfigurationPage;
pub use registration::RegistrationPage;

// =============================================================================
// OUTCOME
// =============================================================================

/// Visual tone of a status line, mirrors the admin UI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Critical,
}

impl Tone {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "tone-success",
            Self::Critical => "tone-critical",
        }
    }
}

const NO_RESULT_MESSAGE: &str = "The platform returned no result";

/// What a form submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded { id: String, message: &'static str },
    Rejected(UserErrors),
}

impl SubmitOutcome {
    /// Map a mutation result: any user error wins over returned ids.
    #[must_use]
    pub fn from_mutation(result: MutationResult, success_message: &'static str) -> Self {
        if !result.user_errors.is_empty() {
            return Self::Rejected(result.user_errors);
        }
        match result.ids.into_iter().next() {
            Some(id) => Self::Succeeded { id, message: success_message },
            None => Self::Rejected(UserErrors::single(NO_RESULT_MESSAGE)),
        }
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            Self::Succeeded { .. } => Tone::Success,
            Self::Rejected(_) => Tone::Critical,
        }
    }

    /// The line shown under the form.
    #[must_use]
    pub fn headline(&self) -> &str {
        match self {
            Self::Succeeded { message, .. } => message,
            Self::Rejected(errors) => errors.first_message().unwrap_or_default(),
        }
    }

    /// User errors after the headline, for the detail list.
    #[must_use]
    pub fn additional_errors(&self) -> Vec<String> {
        match self {
            Self::Succeeded { .. } => Vec::new(),
            Self::Rejected(errors) => errors.messages().skip(1).map(str::to_owned).collect(),
        }
    }
}

// =============================================================================
// PAGE VIEW
// =============================================================================

/// Everything a page needs to render once.
#[derive(Debug, Clone)]
pub struct PageView<I, D> {
    pub items: Vec<I>,
    pub draft: D,
    pub outcome: Option<SubmitOutcome>,
}

// =============================================================================
// RESOURCE PAGE TRAIT
// =============================================================================

/// A page that lists a resource and submits one mutation against it.
#[async_trait::async_trait]
pub trait ResourcePage: Default + Send + Sync + 'static {
    type Item: Send + Sync;
    type Draft;
    type Form: DeserializeOwned + Send + Sync;

    /// Route the page is mounted at.
    const PATH: &'static str;

    /// Load the list shown on the page. `None` means the read came back
    /// without the expected data; it renders as an empty list.
    ///
    /// # Errors
    ///
    /// Transport failures are returned as [`AdminError`].
    async fn fetch(&self, admin: &dyn AdminGraphql) -> Result<Option<Vec<Self::Item>>, AdminError>;

    /// Run the page's mutation for a submitted form.
    ///
    /// # Errors
    ///
    /// Transport failures and unreadable payloads are returned as [`AdminError`].
    async fn submit(
        &self,
        admin: &dyn AdminGraphql,
        config: &AppConfig,
        form: &Self::Form,
    ) -> Result<SubmitOutcome, AdminError>;

    /// Draft state for a fresh render, given the form that was just
    /// submitted (if any) and the freshly loaded items.
    fn draft(&self, submitted: Option<&Self::Form>, items: &[Self::Item]) -> Self::Draft;

    /// Render a complete HTML document.
    fn render(&self, view: PageView<Self::Item, Self::Draft>) -> String;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
