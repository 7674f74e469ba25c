//! Configuration page: pick an enabled delivery customization and push a
//! function configuration metafield to it.

use leptos::prelude::*;
use serde::Deserialize;
use tracing::info;

use super::layout::{Card, OutcomeBanner, PageShell, render_document};
use super::{PageView, ResourcePage, SubmitOutcome};
use crate::config::AppConfig;
use crate::shopify::delivery::{self, FunctionConfiguration};
use crate::shopify::{AdminError, AdminGraphql, DeliveryCustomization, UserErrors};

pub const SUCCESS_MESSAGE: &str = "Successfully modified delivery message";
pub const NO_SELECTION_MESSAGE: &str = "Select a delivery customization";
const DOCUMENT_TITLE: &str = "Customize cart";

// =============================================================================
// FORM + DRAFT
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigurationForm {
    #[serde(rename = "selectedCustomization", default)]
    pub selected_customization: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationDraft {
    pub selected: Option<String>,
    pub message: String,
}

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Enabled customizations only, in platform order.
#[must_use]
pub fn select_options(items: &[DeliveryCustomization]) -> Vec<SelectOption> {
    items
        .iter()
        .filter(|c| c.enabled)
        .map(|c| SelectOption { value: c.id.clone(), label: c.title.clone() })
        .collect()
}

/// Keep `requested` if it is still an option, else fall back to the first
/// enabled option. `None` only when there are no options at all.
#[must_use]
pub fn default_selection(options: &[SelectOption], requested: Option<&str>) -> Option<String> {
    requested
        .and_then(|id| options.iter().find(|o| o.value == id))
        .or_else(|| options.first())
        .map(|o| o.value.clone())
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Debug, Default)]
pub struct ConfigurationPage;

#[async_trait::async_trait]
impl ResourcePage for ConfigurationPage {
    type Item = DeliveryCustomization;
    type Draft = ConfigurationDraft;
    type Form = ConfigurationForm;

    const PATH: &'static str = "/app/use-delivery-customization";

    async fn fetch(&self, admin: &dyn AdminGraphql) -> Result<Option<Vec<DeliveryCustomization>>, AdminError> {
        delivery::list_delivery_customizations(admin).await
    }

    async fn submit(
        &self,
        admin: &dyn AdminGraphql,
        config: &AppConfig,
        form: &ConfigurationForm,
    ) -> Result<SubmitOutcome, AdminError> {
        let owner_id = form.selected_customization.trim();
        if owner_id.is_empty() {
            return Ok(SubmitOutcome::Rejected(UserErrors::single(NO_SELECTION_MESSAGE)));
        }

        let configuration =
            FunctionConfiguration { state_province_code: config.region_code.clone(), message: form.message.clone() };
        let result = delivery::set_function_configuration(admin, owner_id, &configuration).await?;
        let outcome = SubmitOutcome::from_mutation(result, SUCCESS_MESSAGE);
        match &outcome {
            SubmitOutcome::Succeeded { id, .. } => info!(%owner_id, metafield = %id, "function configuration set"),
            SubmitOutcome::Rejected(errors) => info!(%owner_id, errors = errors.len(), "function configuration rejected"),
        }
        Ok(outcome)
    }

    fn draft(&self, submitted: Option<&ConfigurationForm>, items: &[DeliveryCustomization]) -> ConfigurationDraft {
        let options = select_options(items);
        let requested = submitted.map(|f| f.selected_customization.as_str());
        ConfigurationDraft { selected: default_selection(&options, requested), message: String::new() }
    }

    fn render(&self, page: PageView<DeliveryCustomization, ConfigurationDraft>) -> String {
        let options = select_options(&page.items);
        let PageView { draft, outcome, .. } = page;
        render_document(DOCUMENT_TITLE, move || {
            view! { <ConfigurationView options=options draft=draft outcome=outcome /> }
        })
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
fn ConfigurationView(options: Vec<SelectOption>, draft: ConfigurationDraft, outcome: Option<SubmitOutcome>) -> impl IntoView {
    let no_options = options.is_empty();
    let selected = draft.selected;
    let option_views = options
        .into_iter()
        .map(|option| {
            let is_selected = selected.as_deref() == Some(option.value.as_str());
            view! { <option value=option.value selected=is_selected>{option.label}</option> }
        })
        .collect_view();

    view! {
        <PageShell heading="Customize cart here">
            <form method="post">
                <Card>
                    <h2>"Step 1: Pick a delivery customization function to make the change with"</h2>
                    <label>
                        "Delivery customization"
                        <select name="selectedCustomization" disabled=no_options>
                            {option_views}
                        </select>
                    </label>
                    {no_options.then(|| view! { <p class="empty-state">"No enabled delivery customizations"</p> })}
                </Card>
                <Card>
                    <h2>"2. Modify the cart below"</h2>
                    <h4>"There would ideally be more modifications to be made"</h4>
                    <label>
                        "New delivery option message: "
                        <input type="text" name="message" autocomplete="off" value=draft.message />
                    </label>
                    <button type="submit" disabled=no_options>"Modify delivery message"</button>
                    <OutcomeBanner outcome=outcome />
                </Card>
            </form>
        </PageShell>
    }
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod tests;
