mod common;

use axum::http::StatusCode;
use common::{config_body, example_order, send, send_raw, test_app};
use serde_json::json;

#[tokio::test]
async fn test_config_starts_unconfigured() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/config/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["configured"], false);
    assert_eq!(body["hasWorkflowTrigger"], false);
    assert_eq!(body["hasIntegrationAuth"], false);
    assert!(body["configuredAt"].is_null());
}

#[tokio::test]
async fn test_valid_update_configures_the_system() {
    let app = test_app();

    let (status, body) = send(&app.router, "POST", "/api/config", Some(config_body("http://x/hook"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["configured"], true);

    let (_, status_body) = send(&app.router, "GET", "/api/config/status", None).await;
    assert_eq!(status_body["configured"], true);
    assert!(status_body["configuredAt"].is_string());
}

#[tokio::test]
async fn test_update_with_empty_webhook_is_rejected_and_keeps_previous() {
    let app = test_app();
    send(&app.router, "POST", "/api/config", Some(config_body("http://x/hook"))).await;

    let (status, body) = send(&app.router, "POST", "/api/config", Some(config_body(""))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let (_, config) = send(&app.router, "GET", "/api/config", None).await;
    assert_eq!(config["config"]["workflowTrigger"]["webhookUrl"], "http://x/hook");
}

#[tokio::test]
async fn test_get_config_never_exposes_keys() {
    let app = test_app();
    let body = json!({
        "workflowTrigger": { "webhookUrl": "http://x/hook", "baseUrl": "http://x", "apiKey": "trigger-secret" },
        "integrationAuth": { "apiKey": "auth-secret" }
    });
    send(&app.router, "POST", "/api/config", Some(body)).await;

    let (status, config) = send(&app.router, "GET", "/api/config", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!config.to_string().contains("secret"));
    assert_eq!(config["config"]["workflowTrigger"]["hasApiKey"], true);
    assert_eq!(config["config"]["integrationAuth"]["hasApiKey"], true);
    assert_eq!(config["config"]["integrationAuth"]["baseUrl"], "https://api.composio.dev");
}

#[tokio::test]
async fn test_reset_clears_configuration() {
    let app = test_app();
    send(&app.router, "POST", "/api/config", Some(config_body("http://x/hook"))).await;

    let (status, body) = send(&app.router, "POST", "/api/config/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Configuration reset successfully");

    let snapshot = app.config.snapshot().await;
    assert!(!snapshot.configured);
    assert!(snapshot.workflow_trigger.webhook_url.is_empty());
    assert!(snapshot.integration_auth.api_key.is_empty());
}

#[tokio::test]
async fn test_unconfigured_submission_returns_503_and_records_failure() {
    let app = test_app();

    let (status, body) = send(&app.router, "POST", "/api/orders", Some(example_order())).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "SYSTEM_NOT_CONFIGURED");
    assert!(body["hint"].is_string());

    let order_id = body["orderId"].as_str().unwrap();
    let (status, fetched) = send(&app.router, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["order"]["status"], "failed");
    assert_eq!(fetched["order"]["isVIP"], true);
    assert_eq!(fetched["order"]["result"]["error"], "SYSTEM_NOT_CONFIGURED");
}

#[tokio::test]
async fn test_invalid_order_body_is_400() {
    let app = test_app();

    let (status, body) = send(&app.router, "POST", "/api/orders", Some(json!({ "items": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = send(
        &app.router,
        "POST",
        "/api/orders",
        Some(json!({ "customerId": "C", "items": "not-a-list", "totalAmount": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app.router, "GET", "/api/orders", None).await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_unknown_order_is_404() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/orders/ORD-MISSING", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Order not found" }));
}

#[tokio::test]
async fn test_list_orders_keeps_submission_order() {
    let app = test_app();
    for id in ["ORD-B", "ORD-A", "ORD-C"] {
        let mut order = example_order();
        order["orderId"] = json!(id);
        send(&app.router, "POST", "/api/orders", Some(order)).await;
    }

    let (status, body) = send(&app.router, "GET", "/api/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    let ids: Vec<_> = body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["ORD-B", "ORD-A", "ORD-C"]);
}

#[tokio::test]
async fn test_probes_require_input() {
    let app = test_app();

    let (status, body) = send(&app.router, "POST", "/api/config/test/trigger", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Webhook URL is required");

    let (status, body) = send(&app.router, "POST", "/api/config/test/auth", Some(json!({ "apiKey": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "API key is required");
}

#[tokio::test]
async fn test_probes_do_not_touch_configuration() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/config/test/trigger",
        Some(json!({ "webhookUrl": "http://127.0.0.1:1/hook" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["hint"].is_string());
    assert!(!app.config.status().await.configured);
}

#[tokio::test]
async fn test_inventory_and_workflow_data() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/inventory", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["warehouses"]["warehouseA"]["location"], "New York, NY");

    let (status, body) = send(&app.router, "GET", "/api/inventory/b", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["warehouse"]["name"], "Warehouse B - West Coast");

    let (status, body) = send(&app.router, "GET", "/api/inventory/z", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Warehouse not found");

    let (_, body) = send(&app.router, "GET", "/api/workflow/status", None).await;
    assert_eq!(body["status"]["active"], true);

    let (_, body) = send(&app.router, "GET", "/api/workflow/stats", None).await;
    assert_eq!(body["stats"]["totalOrders"], 47);
}

#[tokio::test]
async fn test_health_root_and_webhook_receivers() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (_, body) = send(&app.router, "GET", "/", None).await;
    assert_eq!(body["demoMode"], false);
    assert_eq!(body["endpoints"]["orders"], "/api/orders");

    let (status, body) = send(&app.router, "POST", "/api/webhook/n8n", Some(json!({ "orderId": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Webhook received successfully");

    let (_, body) = send(&app.router, "POST", "/api/webhook/composio", Some(json!({}))).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_non_json_bodies_are_400_everywhere() {
    let app = test_app();

    for uri in ["/api/webhook/n8n", "/api/webhook/composio", "/api/orders", "/api/config"] {
        let status = send_raw(&app.router, uri, "text/plain", "hello").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }

    let status = send_raw(&app.router, "/api/webhook/n8n", "application/json", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
