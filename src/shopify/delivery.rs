//! Delivery customization operations against the Admin API.
//!
//! DESIGN
//! ======
//! All inputs travel as GraphQL variables. The function configuration
//! metafield value is a serialized `FunctionConfiguration`, so user text is
//! always escaped by `serde_json` rather than spliced into a literal.
//!
//! ERROR HANDLING
//! ==============
//! Reads are lenient: a response without the expected shape yields `None`
//! and the caller shows an empty list. Mutations are strict: user errors are
//! returned in full, while a payload with neither ids nor user errors is an
//! `AdminError::ApiParse`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::AdminGraphql;
use super::types::{AdminError, DeliveryCustomization, MutationResult, UserError, UserErrors};

pub const METAFIELD_NAMESPACE: &str = "delivery-customization";
pub const METAFIELD_KEY: &str = "function-configuration";
pub const METAFIELD_TYPE: &str = "json";

/// Advisory ceiling on enabled customizations. Not enforced here.
pub const MAX_ENABLED_CUSTOMIZATIONS: usize = 5;

pub const LIST_QUERY: &str = r"query DeliveryCustomizations {
  deliveryCustomizations(first: 50) {
    nodes {
      enabled
      id
      title
    }
  }
}";

pub const CREATE_MUTATION: &str = r"mutation DeliveryCustomizationCreate($deliveryCustomization: DeliveryCustomizationInput!) {
  deliveryCustomizationCreate(deliveryCustomization: $deliveryCustomization) {
    deliveryCustomization {
      id
    }
    userErrors {
      message
    }
  }
}";

pub const METAFIELDS_SET_MUTATION: &str = r"mutation SetFunctionConfiguration($metafields: [MetafieldsSetInput!]!) {
  metafieldsSet(metafields: $metafields) {
    metafields {
      id
    }
    userErrors {
      message
    }
  }
}";

// =============================================================================
// INPUTS
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCustomizationInput<'a> {
    pub enabled: bool,
    pub function_id: &'a str,
    pub title: &'a str,
}

/// Configuration the delivery customization function reads at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfiguration {
    pub state_province_code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldInput {
    pub owner_id: String,
    pub namespace: &'static str,
    pub key: &'static str,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl MetafieldInput {
    /// Metafield carrying `config` for the customization `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Encode`] if the configuration cannot be serialized.
    pub fn function_configuration(owner_id: &str, config: &FunctionConfiguration) -> Result<Self, AdminError> {
        let value = serde_json::to_string(config).map_err(|e| AdminError::Encode(e.to_string()))?;
        Ok(Self { owner_id: owner_id.to_owned(), namespace: METAFIELD_NAMESPACE, key: METAFIELD_KEY, value, kind: METAFIELD_TYPE })
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// List up to 50 delivery customizations in platform order.
///
/// Returns `Ok(None)` when the response does not have the expected shape.
///
/// # Errors
///
/// Returns an [`AdminError`] only for transport-level failures.
pub async fn list_delivery_customizations(
    admin: &dyn AdminGraphql,
) -> Result<Option<Vec<DeliveryCustomization>>, AdminError> {
    let response = admin.execute(LIST_QUERY, Value::Object(serde_json::Map::new())).await?;
    if !response.errors.is_empty() {
        warn!(errors = response.errors.len(), "delivery customization list returned GraphQL errors");
    }

    let parsed = parse_customizations(response.data.as_ref());
    if parsed.is_none() {
        warn!("delivery customization list response missing expected data");
    }
    Ok(parsed)
}

/// Create an enabled delivery customization bound to `function_id`.
///
/// # Errors
///
/// Returns an [`AdminError`] on transport failure or an unreadable payload.
pub async fn create_delivery_customization(
    admin: &dyn AdminGraphql,
    function_id: &str,
    title: &str,
) -> Result<MutationResult, AdminError> {
    let input = DeliveryCustomizationInput { enabled: true, function_id, title };
    let variables = serde_json::json!({ "deliveryCustomization": input });
    let response = admin.execute(CREATE_MUTATION, variables).await?;
    parse_mutation(response.data.as_ref(), response.errors, "deliveryCustomizationCreate", "/deliveryCustomization/id")
}

/// Write `config` to the function configuration metafield of `owner_id`.
///
/// # Errors
///
/// Returns an [`AdminError`] on encode or transport failure or an unreadable payload.
pub async fn set_function_configuration(
    admin: &dyn AdminGraphql,
    owner_id: &str,
    config: &FunctionConfiguration,
) -> Result<MutationResult, AdminError> {
    let metafield = MetafieldInput::function_configuration(owner_id, config)?;
    let variables = serde_json::json!({ "metafields": [metafield] });
    let response = admin.execute(METAFIELDS_SET_MUTATION, variables).await?;
    parse_mutation(response.data.as_ref(), response.errors, "metafieldsSet", "/metafields")
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_customizations(data: Option<&Value>) -> Option<Vec<DeliveryCustomization>> {
    let nodes = data?.pointer("/deliveryCustomizations/nodes")?;
    serde_json::from_value(nodes.clone()).ok()
}

/// Read `{ <field> { ...ids, userErrors { message } } }`.
///
/// `id_pointer` locates either a single id string or an array of `{ id }`
/// nodes inside the mutation payload. Top-level GraphQL errors are folded in
/// after the payload's own user errors.
pub(crate) fn parse_mutation(
    data: Option<&Value>,
    top_level_errors: Vec<UserError>,
    field: &str,
    id_pointer: &str,
) -> Result<MutationResult, AdminError> {
    let payload = data.and_then(|d| d.get(field)).filter(|p| !p.is_null());

    let mut errors: Vec<UserError> = match payload.and_then(|p| p.get("userErrors")) {
        Some(raw) if !raw.is_null() => {
            serde_json::from_value(raw.clone()).map_err(|e| AdminError::ApiParse(format!("{field}.userErrors: {e}")))?
        }
        _ => Vec::new(),
    };
    errors.extend(top_level_errors);

    let ids = payload
        .and_then(|p| p.pointer(id_pointer))
        .map(collect_ids)
        .unwrap_or_default();

    if ids.is_empty() && errors.is_empty() {
        return Err(AdminError::ApiParse(format!("{field} returned neither ids nor userErrors")));
    }

    Ok(MutationResult { ids, user_errors: UserErrors::new(errors) })
}

fn collect_ids(value: &Value) -> Vec<String> {
    match value {
        Value::String(id) => vec![id.clone()],
        Value::Array(nodes) => nodes
            .iter()
            .filter_map(|n| n.get("id").and_then(Value::as_str))
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "delivery_test.rs"]
mod tests;
