//! Scripted stand-in for the node, used by unit tests.

use super::RpcContext;
use crate::error::{AccountCliError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockRpc {
    replies: Mutex<VecDeque<std::result::Result<Value, String>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful `result` for the next call.
    pub fn reply(self, result: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Queue a remote error for the next call.
    pub fn fail(self, message: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(method, _)| method).collect()
    }
}

#[async_trait]
impl RpcContext for MockRpc {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        self.calls.lock().unwrap().push((method.to_string(), params));
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(AccountCliError::Rpc(message)),
            None => Err(AccountCliError::Rpc(format!("unexpected call to {}", method))),
        }
    }
}
