use crate::dispatch::{DispatchError, DispatchTarget, OrderDispatcher};
use crate::model::Order;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default bound on a single webhook call.
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts orders to the workflow trigger over HTTP.
///
/// The stored trigger API key, when present, is sent as a bearer credential.
#[derive(Clone)]
pub struct HttpDispatcher {
    client: Client,
    timeout: Duration,
}

impl HttpDispatcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl OrderDispatcher for HttpDispatcher {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    async fn dispatch(&self, target: &DispatchTarget, order: &Order) -> Result<Value, DispatchError> {
        debug!(?target, "Posting order to workflow trigger");
        let mut request = self.client.post(&target.webhook_url).json(order);
        if let Some(api_key) = &target.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DispatchError::from_reqwest(e, self.timeout))?;
        let status = response.status();
        let body = read_body(response)
            .await
            .map_err(|e| DispatchError::from_reqwest(e, self.timeout))?;

        if !status.is_success() {
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body.unwrap_or(Value::Null))
    }
}

/// Reads a response body as JSON, falling back to a JSON string for non-JSON
/// bodies. An empty body is `None`.
pub(crate) async fn read_body(response: Response) -> Result<Option<Value>, reqwest::Error> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        Value::String(String::from_utf8_lossy(&bytes).into_owned())
    })))
}
