//! Registration page: list delivery customizations and register new ones.

use leptos::prelude::*;
use serde::Deserialize;
use tracing::info;

use super::layout::{Card, OutcomeBanner, PageShell, render_document};
use super::{PageView, ResourcePage, SubmitOutcome, Tone};
use crate::config::AppConfig;
use crate::shopify::delivery::{self, MAX_ENABLED_CUSTOMIZATIONS};
use crate::shopify::{AdminError, AdminGraphql, DeliveryCustomization, UserErrors};

pub const SUCCESS_MESSAGE: &str = "Successfully created";
pub const BLANK_NAME_MESSAGE: &str = "Enter a name for the delivery customization";
const DOCUMENT_TITLE: &str = "Add delivery customizations";

// =============================================================================
// FORM + DRAFT
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(rename = "fnName", default)]
    pub fn_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub fn_name: String,
}

// =============================================================================
// VIEW MODEL
// =============================================================================

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationRow {
    pub id: String,
    pub title: String,
    pub status: &'static str,
    pub tone: Tone,
}

impl From<&DeliveryCustomization> for CustomizationRow {
    fn from(c: &DeliveryCustomization) -> Self {
        let (status, tone) = if c.enabled { ("enabled", Tone::Success) } else { ("disabled", Tone::Critical) };
        Self { id: c.id.clone(), title: c.title.clone(), status, tone }
    }
}

#[must_use]
pub fn rows(items: &[DeliveryCustomization]) -> Vec<CustomizationRow> {
    items.iter().map(CustomizationRow::from).collect()
}

#[must_use]
pub fn enabled_count(items: &[DeliveryCustomization]) -> usize {
    items.iter().filter(|c| c.enabled).count()
}

/// Warning once the advisory limit on enabled customizations is reached.
/// Creation is still allowed; the platform or an operator enforces the cap.
#[must_use]
pub fn limit_notice(enabled: usize) -> Option<String> {
    (enabled >= MAX_ENABLED_CUSTOMIZATIONS).then(|| {
        format!(
            "{enabled} of {MAX_ENABLED_CUSTOMIZATIONS} enabled functions are in use. \
             Contact the engineering team before adding more."
        )
    })
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Debug, Default)]
pub struct RegistrationPage;

#[async_trait::async_trait]
impl ResourcePage for RegistrationPage {
    type Item = DeliveryCustomization;
    type Draft = RegistrationDraft;
    type Form = RegistrationForm;

    const PATH: &'static str = "/app/add-delivery-customization";

    async fn fetch(&self, admin: &dyn AdminGraphql) -> Result<Option<Vec<DeliveryCustomization>>, AdminError> {
        delivery::list_delivery_customizations(admin).await
    }

    async fn submit(
        &self,
        admin: &dyn AdminGraphql,
        config: &AppConfig,
        form: &RegistrationForm,
    ) -> Result<SubmitOutcome, AdminError> {
        if form.fn_name.trim().is_empty() {
            return Ok(SubmitOutcome::Rejected(UserErrors::single(BLANK_NAME_MESSAGE)));
        }

        let result = delivery::create_delivery_customization(admin, &config.function_id, &form.fn_name).await?;
        let outcome = SubmitOutcome::from_mutation(result, SUCCESS_MESSAGE);
        match &outcome {
            SubmitOutcome::Succeeded { id, .. } => info!(%id, title = %form.fn_name, "delivery customization created"),
            SubmitOutcome::Rejected(errors) => {
                info!(errors = errors.len(), title = %form.fn_name, "delivery customization create rejected");
            }
        }
        Ok(outcome)
    }

    fn draft(&self, _submitted: Option<&RegistrationForm>, _items: &[DeliveryCustomization]) -> RegistrationDraft {
        RegistrationDraft::default()
    }

    fn render(&self, page: PageView<DeliveryCustomization, RegistrationDraft>) -> String {
        let enabled = enabled_count(&page.items);
        let rows = rows(&page.items);
        let PageView { draft, outcome, .. } = page;
        render_document(DOCUMENT_TITLE, move || {
            view! { <RegistrationView rows=rows enabled=enabled draft=draft outcome=outcome /> }
        })
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
fn RegistrationView(
    rows: Vec<CustomizationRow>,
    enabled: usize,
    draft: RegistrationDraft,
    outcome: Option<SubmitOutcome>,
) -> impl IntoView {
    let list = if rows.is_empty() {
        view! { <h3 class="empty-state">"No delivery customizations"</h3> }.into_any()
    } else {
        view! {
            <ul class="customization-list">
                {rows.into_iter().map(|row| view! { <CustomizationItem row=row /> }).collect_view()}
            </ul>
        }
        .into_any()
    };
    let notice = limit_notice(enabled);

    view! {
        <PageShell heading="Add delivery customisations here">
            <Card>
                <h2>"Currently created delivery customization functions"</h2>
                {list}
            </Card>
            <Card>
                <h3>"Register a new delivery customization function below. Give it a name and click the button below."</h3>
                <h4>"There can be a maximum of 5 enabled functions. Contact the engineering team to modify them."</h4>
                {notice.map(|text| view! { <p class="limit-notice tone-caution">{text}</p> })}
                <form method="post">
                    <label>
                        "Delivery customization name"
                        <input type="text" name="fnName" placeholder="Enter here" autocomplete="off" value=draft.fn_name />
                    </label>
                    <button type="submit">"Create new delivery customization"</button>
                </form>
                <OutcomeBanner outcome=outcome />
            </Card>
        </PageShell>
    }
}

#[component]
fn CustomizationItem(row: CustomizationRow) -> impl IntoView {
    let status_class = format!("customization-status {}", row.tone.class_name());
    view! {
        <li class="customization-item" id=row.id>
            <h3>{row.title}</h3>
            <p class=status_class>{row.status}</p>
        </li>
    }
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
