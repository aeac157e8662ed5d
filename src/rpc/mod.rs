pub mod types;

#[cfg(test)]
pub mod mock;

use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Remote procedures the account commands call on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    GetAccounts,
    GetAllExecBalance,
    GetHeaders,
    GetBalance,
    ImportPrivkey,
    NewAccount,
    SetLabel,
    DumpPrivkey,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::GetAccounts => "Chain33.GetAccounts",
            RpcMethod::GetAllExecBalance => "Chain33.GetAllExecBalance",
            RpcMethod::GetHeaders => "Chain33.GetHeaders",
            RpcMethod::GetBalance => "Chain33.GetBalance",
            RpcMethod::ImportPrivkey => "Chain33.ImportPrivkey",
            RpcMethod::NewAccount => "Chain33.NewAccount",
            // The node registers this one without the trailing 'e'
            RpcMethod::SetLabel => "Chain33.SetLabl",
            RpcMethod::DumpPrivkey => "Chain33.DumpPrivkey",
        }
    }
}

/// Anything that can carry one JSON-RPC call to the node and hand back the
/// `result` value. Errors are returned as-is to the command that issued the call.
#[async_trait]
pub trait RpcContext: Send + Sync {
    async fn call(&self, method: &str, params: Value) -> Result<Value>;
}

/// Serializes `request`, issues `method`, and decodes the reply into `Reply`.
pub async fn invoke<Req, Reply>(ctx: &dyn RpcContext, method: RpcMethod, request: &Req) -> Result<Reply>
where
    Req: Serialize + ?Sized,
    Reply: DeserializeOwned,
{
    let params = serde_json::to_value(request)?;
    debug!(method = method.as_str(), "issuing rpc");
    let result = ctx.call(method.as_str(), params).await?;
    Ok(serde_json::from_value(result)?)
}
