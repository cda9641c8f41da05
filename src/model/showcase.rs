//! Fixed presentation data for the dashboard: warehouse stock and workflow
//! statistics. Nothing here is computed; the real numbers live in the external
//! workflow.

use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub sku: &'static str,
    pub name: &'static str,
    pub stock: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub name: &'static str,
    pub location: &'static str,
    pub items: Vec<StockItem>,
    pub average_shipping_time: u32,
    pub shipping_cost: f64,
}

fn stock(sku: &'static str, name: &'static str, stock: u32, price: f64) -> StockItem {
    StockItem {
        sku,
        name,
        stock,
        price,
    }
}

/// All warehouses, keyed as `warehouseA`, `warehouseB`.
pub fn warehouses() -> Vec<(&'static str, Warehouse)> {
    vec![
        (
            "warehouseA",
            Warehouse {
                name: "Warehouse A - East Coast",
                location: "New York, NY",
                items: vec![
                    stock("PROD-001", "Premium Widget", 150, 99.99),
                    stock("PROD-002", "Deluxe Gadget", 75, 149.99),
                    stock("PROD-003", "Standard Tool", 200, 49.99),
                    stock("PROD-004", "Pro Equipment", 50, 299.99),
                ],
                average_shipping_time: 2,
                shipping_cost: 15.00,
            },
        ),
        (
            "warehouseB",
            Warehouse {
                name: "Warehouse B - West Coast",
                location: "Los Angeles, CA",
                items: vec![
                    stock("PROD-001", "Premium Widget", 200, 99.99),
                    stock("PROD-002", "Deluxe Gadget", 100, 149.99),
                    stock("PROD-003", "Standard Tool", 50, 49.99),
                    stock("PROD-004", "Pro Equipment", 125, 299.99),
                ],
                average_shipping_time: 3,
                shipping_cost: 12.00,
            },
        ),
    ]
}

/// Looks up a warehouse by its short code (`a`, `B`, ...).
pub fn warehouse(code: &str) -> Option<Warehouse> {
    let key = format!("warehouse{}", code.to_uppercase());
    warehouses()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, w)| w)
}

const WORKFLOW_NODES: [(&str, &str); 10] = [
    ("webhook-trigger", "Composio Webhook Trigger"),
    ("parse-order", "Parse Order Data"),
    ("check-warehouse-a", "Check Inventory - Warehouse A"),
    ("check-warehouse-b", "Check Inventory - Warehouse B"),
    ("determine-warehouse", "Determine Best Warehouse"),
    ("calculate-tax", "Calculate Tax"),
    ("generate-pdf", "Generate PDF Invoice"),
    ("update-crm", "Update CRM System"),
    ("update-erp", "Update ERP System"),
    ("send-notification", "Send Notification"),
];

pub fn workflow_status() -> Value {
    let nodes: Vec<Value> = WORKFLOW_NODES
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name, "status": "healthy" }))
        .collect();
    json!({
        "workflowId": "vip-order-workflow",
        "name": "VIP Order Processing",
        "active": true,
        "lastExecution": Utc::now() - Duration::minutes(5),
        "executions": { "total": 47, "successful": 45, "failed": 2 },
        "averageExecutionTime": "2.3s",
        "nodes": nodes,
    })
}

pub fn workflow_stats() -> Value {
    json!({
        "totalOrders": 47,
        "successRate": 95.7,
        "averageProcessingTime": 2.3,
        "warehouseDistribution": { "A": 23, "B": 24 },
        "totalRevenue": 234567.89,
        "vipDiscount": 23456.79,
        "systemsIntegrated": [
            "CRM", "ERP", "Warehouse A", "Warehouse B", "Tax API", "PDF Generator", "Notifications"
        ],
    })
}
