use super::*;
use crate::shopify::test_helpers::{MockAdmin, list_body};

// =============================================================================
// list_delivery_customizations
// =============================================================================

#[tokio::test]
async fn list_returns_nodes_in_platform_order() {
    let mock = MockAdmin::new(vec![list_body(serde_json::json!([
        { "id": "gid://shopify/DeliveryCustomization/2", "title": "Zed", "enabled": false },
        { "id": "gid://shopify/DeliveryCustomization/1", "title": "Alpha", "enabled": true },
    ]))]);

    let items = list_delivery_customizations(&mock).await.unwrap().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Zed");
    assert!(!items[0].enabled);
    assert_eq!(items[1].id, "gid://shopify/DeliveryCustomization/1");

    let recorded = mock.recorded();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].query.contains("deliveryCustomizations(first: 50)"));
}

#[tokio::test]
async fn list_missing_data_yields_none() {
    let mock = MockAdmin::new(vec![serde_json::json!({ "data": null, "errors": [{ "message": "Access denied" }] })]);
    assert_eq!(list_delivery_customizations(&mock).await.unwrap(), None);
}

#[tokio::test]
async fn list_transport_failure_propagates() {
    let mock = MockAdmin::failing(AdminError::ApiRequest("connection reset".into()));
    let err = list_delivery_customizations(&mock).await.unwrap_err();
    assert!(matches!(err, AdminError::ApiRequest(_)));
}

#[test]
fn parse_customizations_rejects_malformed_nodes() {
    let data = serde_json::json!({ "deliveryCustomizations": { "nodes": [{ "id": "1" }] } });
    assert_eq!(parse_customizations(Some(&data)), None);
}

#[test]
fn parse_customizations_accepts_empty_list() {
    let data = serde_json::json!({ "deliveryCustomizations": { "nodes": [] } });
    assert_eq!(parse_customizations(Some(&data)), Some(Vec::new()));
}

// =============================================================================
// create_delivery_customization
// =============================================================================

#[tokio::test]
async fn create_sends_enabled_input_with_function_id() {
    let mock = MockAdmin::new(vec![serde_json::json!({
        "data": { "deliveryCustomizationCreate": {
            "deliveryCustomization": { "id": "gid://shopify/DeliveryCustomization/9" },
            "userErrors": []
        } }
    })]);

    let result = create_delivery_customization(&mock, "fn-abc", "Holiday Promo").await.unwrap();
    assert_eq!(result.ids, vec!["gid://shopify/DeliveryCustomization/9".to_owned()]);
    assert!(result.user_errors.is_empty());

    let recorded = mock.recorded();
    assert_eq!(recorded[0].query, CREATE_MUTATION);
    assert_eq!(
        recorded[0].variables,
        serde_json::json!({ "deliveryCustomization": { "enabled": true, "functionId": "fn-abc", "title": "Holiday Promo" } })
    );
}

#[tokio::test]
async fn create_returns_every_user_error() {
    let mock = MockAdmin::new(vec![serde_json::json!({
        "data": { "deliveryCustomizationCreate": {
            "deliveryCustomization": null,
            "userErrors": [{ "message": "Title already taken" }, { "message": "Too many customizations" }]
        } }
    })]);

    let result = create_delivery_customization(&mock, "fn-abc", "Holiday Promo").await.unwrap();
    assert!(result.ids.is_empty());
    assert_eq!(result.user_errors.first_message(), Some("Title already taken"));
    assert_eq!(result.user_errors.len(), 2);
}

#[tokio::test]
async fn create_folds_top_level_errors_into_user_errors() {
    let mock = MockAdmin::new(vec![serde_json::json!({
        "data": null,
        "errors": [{ "message": "Throttled" }]
    })]);

    let result = create_delivery_customization(&mock, "fn-abc", "Promo").await.unwrap();
    assert_eq!(result.user_errors.first_message(), Some("Throttled"));
}

#[tokio::test]
async fn create_empty_payload_is_parse_error() {
    let mock = MockAdmin::new(vec![serde_json::json!({ "data": { "deliveryCustomizationCreate": null } })]);
    let err = create_delivery_customization(&mock, "fn-abc", "Promo").await.unwrap_err();
    assert!(matches!(err, AdminError::ApiParse(_)));
}

// =============================================================================
// set_function_configuration
// =============================================================================

#[test]
fn metafield_value_escapes_quotes_and_control_characters() {
    let config = FunctionConfiguration {
        state_province_code: "NSW".into(),
        message: "Say \"hi\"\nnext line \\ done".into(),
    };
    let metafield = MetafieldInput::function_configuration("gid://shopify/DeliveryCustomization/1", &config).unwrap();

    let decoded: FunctionConfiguration = serde_json::from_str(&metafield.value).unwrap();
    assert_eq!(decoded, config);
    assert_eq!(metafield.namespace, "delivery-customization");
    assert_eq!(metafield.key, "function-configuration");
    assert_eq!(metafield.kind, "json");
}

#[tokio::test]
async fn set_configuration_sends_structured_metafield() {
    let mock = MockAdmin::new(vec![serde_json::json!({
        "data": { "metafieldsSet": {
            "metafields": [{ "id": "gid://shopify/Metafield/77" }],
            "userErrors": []
        } }
    })]);
    let config = FunctionConfiguration { state_province_code: "NSW".into(), message: "Free \"express\" today".into() };

    let result = set_function_configuration(&mock, "gid://shopify/DeliveryCustomization/1", &config)
        .await
        .unwrap();
    assert_eq!(result.ids, vec!["gid://shopify/Metafield/77".to_owned()]);

    let recorded = mock.recorded();
    assert_eq!(recorded[0].query, METAFIELDS_SET_MUTATION);
    let metafield = &recorded[0].variables["metafields"][0];
    assert_eq!(metafield["ownerId"], "gid://shopify/DeliveryCustomization/1");
    assert_eq!(metafield["namespace"], "delivery-customization");
    assert_eq!(metafield["key"], "function-configuration");
    assert_eq!(metafield["type"], "json");
    let value: serde_json::Value = serde_json::from_str(metafield["value"].as_str().unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "stateProvinceCode": "NSW", "message": "Free \"express\" today" }));
}

#[tokio::test]
async fn set_configuration_reports_user_errors() {
    let mock = MockAdmin::new(vec![serde_json::json!({
        "data": { "metafieldsSet": {
            "metafields": [],
            "userErrors": [{ "message": "Owner does not exist" }]
        } }
    })]);
    let config = FunctionConfiguration { state_province_code: "NSW".into(), message: "hello".into() };

    let result = set_function_configuration(&mock, "gid://missing", &config).await.unwrap();
    assert!(result.ids.is_empty());
    assert_eq!(result.user_errors.first_message(), Some("Owner does not exist"));
}

#[tokio::test]
async fn set_configuration_with_no_metafields_and_no_errors_is_parse_error() {
    let mock = MockAdmin::new(vec![serde_json::json!({
        "data": { "metafieldsSet": { "metafields": [], "userErrors": [] } }
    })]);
    let config = FunctionConfiguration { state_province_code: "NSW".into(), message: "hello".into() };

    let err = set_function_configuration(&mock, "gid://shopify/DeliveryCustomization/1", &config)
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::ApiParse(_)));
}
