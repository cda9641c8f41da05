use crate::dispatch::{DispatchError, DispatchTarget, OrderDispatcher};
use crate::model::Order;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

/// Tax rate folded into the simulated invoice total.
const DEMO_TAX_RATE: f64 = 0.1;

/// Demo-mode dispatcher: waits `delay`, then reports a completed result as if
/// the workflow had picked warehouse A and issued an invoice.
///
/// The target is ignored; no network call is made.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDispatcher {
    delay: Duration,
}

impl SimulatedDispatcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl OrderDispatcher for SimulatedDispatcher {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn dispatch(&self, _target: &DispatchTarget, order: &Order) -> Result<Value, DispatchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        info!(order_id = %order.order_id, "Simulated workflow run");
        Ok(json!({
            "success": true,
            "orderId": order.order_id,
            "message": "VIP order processed successfully (Demo Mode)",
            "warehouse": "A",
            "invoiceUrl": format!("https://demo.wyntech.com/invoices/{}.pdf", order.order_id),
            "total": order.payload.total_amount * (1.0 + DEMO_TAX_RATE),
            "processingTime": "2.3s",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderPayload, OrderSubmission};
    use chrono::Utc;

    #[tokio::test]
    async fn test_simulated_result_mirrors_order() {
        let order = Order::received(
            OrderSubmission {
                order_id: Some("ORD-DEMO".to_string()),
                payload: OrderPayload {
                    customer_id: "CUST-001".to_string(),
                    items: vec![],
                    shipping_address: None,
                    total_amount: 100.0,
                    is_vip: true,
                    extra: Default::default(),
                },
            },
            Utc::now(),
        );
        let target = DispatchTarget {
            webhook_url: "http://unused".to_string(),
            api_key: None,
        };

        let result = SimulatedDispatcher::default()
            .dispatch(&target, &order)
            .await
            .unwrap();

        assert_eq!(result["orderId"], "ORD-DEMO");
        assert_eq!(result["warehouse"], "A");
        assert_eq!(
            result["invoiceUrl"],
            "https://demo.wyntech.com/invoices/ORD-DEMO.pdf"
        );
        assert!((result["total"].as_f64().unwrap() - 110.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_delay_is_applied() {
        let order = Order::received(
            OrderSubmission {
                order_id: None,
                payload: OrderPayload {
                    customer_id: "C".to_string(),
                    items: vec![],
                    shipping_address: None,
                    total_amount: 1.0,
                    is_vip: true,
                    extra: Default::default(),
                },
            },
            Utc::now(),
        );
        let target = DispatchTarget {
            webhook_url: String::new(),
            api_key: None,
        };
        let started = std::time::Instant::now();

        SimulatedDispatcher::new(Duration::from_millis(50))
            .dispatch(&target, &order)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
    }
}
