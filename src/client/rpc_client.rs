// RPC client for making JSON-RPC requests to the node
use crate::error::{AccountCliError, Result};
use crate::rpc::types::{RpcRequest, RpcResponse};
use crate::rpc::RpcContext;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

pub struct RpcClient {
    url: String,
    client: Client,
    request_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url,
            client,
            request_id: AtomicU64::new(1),
        })
    }

    // Helper for sending requests
    async fn send_request(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params: vec![params],
        };

        debug!(url = %self.url, method, id, "POST");
        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        into_result(response, id)
    }
}

#[async_trait]
impl RpcContext for RpcClient {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        self.send_request(method, params).await
    }
}

/// The node reports errors either as a bare string or as `{code, message}`.
fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(
            other
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        ),
    }
}

/// Replies without an id are accepted; a different id is not.
fn into_result(response: RpcResponse, request_id: u64) -> Result<Value> {
    if let Some(reply_id) = response.id {
        if reply_id != request_id {
            return Err(AccountCliError::Rpc(format!(
                "response id {} does not match request id {}",
                reply_id, request_id
            )));
        }
    }
    if let Some(message) = error_message(&response.error) {
        return Err(AccountCliError::Rpc(message));
    }
    Ok(response.result)
}
