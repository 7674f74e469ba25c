use std::sync::Arc;

use super::*;
use crate::pages::configuration::ConfigurationForm;
use crate::pages::registration::RegistrationForm;
use crate::pages::{ConfigurationPage, RegistrationPage};
use crate::shopify::AdminGraphql;
use crate::shopify::test_helpers::{MockAdmin, list_body};
use crate::state::test_helpers::test_app_state;

fn session(mock: &Arc<MockAdmin>) -> AdminSession {
    AdminSession { admin: Arc::clone(mock) as Arc<dyn AdminGraphql> }
}

fn nudge_list() -> serde_json::Value {
    list_body(serde_json::json!([{ "id": "1", "title": "Free Shipping Nudge", "enabled": true }]))
}

// =============================================================================
// GET
// =============================================================================

#[tokio::test]
async fn show_registration_lists_customizations() {
    let mock = Arc::new(MockAdmin::new(vec![nudge_list()]));
    let Html(html) = show::<RegistrationPage>(session(&mock)).await.unwrap();
    assert_eq!(html.matches("class=\"customization-item\"").count(), 1);
    assert!(html.contains("Free Shipping Nudge"));
    assert_eq!(html.matches("class=\"customization-status tone-success\"").count(), 1);
}

#[tokio::test]
async fn show_configuration_offers_enabled_option() {
    let mock = Arc::new(MockAdmin::new(vec![nudge_list()]));
    let Html(html) = show::<ConfigurationPage>(session(&mock)).await.unwrap();
    assert_eq!(html.matches("<option").count(), 1);
    assert!(html.contains("value=\"1\""));
}

#[tokio::test]
async fn show_with_zero_records_renders_empty_states() {
    let mock = Arc::new(MockAdmin::new(vec![list_body(serde_json::json!([])), list_body(serde_json::json!([]))]));
    let Html(registration) = show::<RegistrationPage>(session(&mock)).await.unwrap();
    let Html(configuration) = show::<ConfigurationPage>(session(&mock)).await.unwrap();
    assert!(registration.contains("No delivery customizations"));
    assert_eq!(configuration.matches("<option").count(), 0);
}

#[tokio::test]
async fn show_malformed_read_renders_empty_list() {
    let mock = Arc::new(MockAdmin::new(vec![serde_json::json!({ "data": { "unexpected": true } })]));
    let Html(html) = show::<RegistrationPage>(session(&mock)).await.unwrap();
    assert!(html.contains("No delivery customizations"));
}

#[tokio::test]
async fn show_reload_without_write_is_unchanged() {
    let mock = Arc::new(MockAdmin::new(vec![nudge_list(), nudge_list()]));
    let Html(first) = show::<RegistrationPage>(session(&mock)).await.unwrap();
    let Html(second) = show::<RegistrationPage>(session(&mock)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn show_transport_failure_is_bad_gateway() {
    let mock = Arc::new(MockAdmin::failing(AdminError::ApiRequest("connection refused".into())));
    let err = show::<RegistrationPage>(session(&mock)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// POST
// =============================================================================

#[tokio::test]
async fn submit_create_rejected_shows_first_error_and_reloads() {
    let mock = Arc::new(MockAdmin::new(vec![
        serde_json::json!({
            "data": { "deliveryCustomizationCreate": {
                "deliveryCustomization": null,
                "userErrors": [{ "message": "Title already taken" }]
            } }
        }),
        nudge_list(),
    ]));
    let state = test_app_state(mock.clone());
    let form = RegistrationForm { fn_name: "Holiday Promo".into() };

    let Html(html) = submit::<RegistrationPage>(State(state), session(&mock), Form(form)).await.unwrap();
    assert!(html.contains("class=\"outcome tone-critical\""));
    assert!(html.contains("Title already taken"));
    assert!(!html.contains("value=\"Holiday Promo\""));

    let recorded = mock.recorded();
    assert_eq!(recorded.len(), 2);
    assert!(recorded[0].query.contains("deliveryCustomizationCreate"));
    assert!(recorded[1].query.contains("deliveryCustomizations(first: 50)"));
}

#[tokio::test]
async fn submit_create_success_shows_message() {
    let mock = Arc::new(MockAdmin::new(vec![
        serde_json::json!({
            "data": { "deliveryCustomizationCreate": {
                "deliveryCustomization": { "id": "gid://shopify/DeliveryCustomization/2" },
                "userErrors": []
            } }
        }),
        list_body(serde_json::json!([
            { "id": "1", "title": "Free Shipping Nudge", "enabled": true },
            { "id": "gid://shopify/DeliveryCustomization/2", "title": "Holiday Promo", "enabled": true },
        ])),
    ]));
    let state = test_app_state(mock.clone());
    let form = RegistrationForm { fn_name: "Holiday Promo".into() };

    let Html(html) = submit::<RegistrationPage>(State(state), session(&mock), Form(form)).await.unwrap();
    assert!(html.contains("class=\"outcome tone-success\""));
    assert!(html.contains("Successfully created"));
    assert_eq!(html.matches("class=\"customization-item\"").count(), 2);
}

#[tokio::test]
async fn submit_configuration_sets_metafield() {
    let mock = Arc::new(MockAdmin::new(vec![
        serde_json::json!({
            "data": { "metafieldsSet": { "metafields": [{ "id": "gid://shopify/Metafield/1" }], "userErrors": [] } }
        }),
        nudge_list(),
    ]));
    let state = test_app_state(mock.clone());
    let form = ConfigurationForm { selected_customization: "1".into(), message: "Say \"hi\"".into() };

    let Html(html) = submit::<ConfigurationPage>(State(state), session(&mock), Form(form)).await.unwrap();
    assert!(html.contains("Successfully modified delivery message"));

    let recorded = mock.recorded();
    assert_eq!(recorded[0].variables["metafields"][0]["ownerId"], "1");
}

#[tokio::test]
async fn submit_transport_failure_is_bad_gateway() {
    let mock = Arc::new(MockAdmin::failing(AdminError::ApiResponse { status: 503, body: "unavailable".into() }));
    let state = test_app_state(mock.clone());
    let form = RegistrationForm { fn_name: "Holiday Promo".into() };

    let err = submit::<RegistrationPage>(State(state), session(&mock), Form(form)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}
