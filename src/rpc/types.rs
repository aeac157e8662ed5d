// RPC types for the node's JSON-RPC 2.0 interface
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'a str,
    pub id: u64,
    pub method: &'a str,
    pub params: Vec<Value>,
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Value,
}

// Method-specific request types

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReqString {
    pub data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReplyString {
    #[serde(default)]
    pub data: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReqAddr {
    pub addr: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReqBlocks {
    pub start: i64,
    pub end: i64,
    pub is_detail: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReqBalance {
    pub addresses: Vec<String>,
    pub execer: String,
    /// Empty means latest state.
    pub state_hash: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReqWalletImportPrivkey {
    pub privkey: String,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReqNewAccount {
    pub label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReqWalletSetLabel {
    pub addr: String,
    pub label: String,
}

// Reply types

/// Raw account snapshot, amounts in smallest ledger units.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Account {
    #[serde(default)]
    pub currency: i32,
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub frozen: i64,
    #[serde(default)]
    pub addr: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub parent_hash: String,
    #[serde(default)]
    pub tx_hash: String,
    #[serde(default)]
    pub state_hash: String,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub block_time: i64,
    #[serde(default)]
    pub tx_count: i64,
    #[serde(default)]
    pub hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Headers {
    #[serde(default)]
    pub items: Vec<Header>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExecAccount {
    pub execer: String,
    pub account: Account,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllExecBalance {
    pub addr: String,
    #[serde(default)]
    pub exec_account: Vec<ExecAccount>,
}

/// Account held by the node's wallet, with its label.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WalletAccount {
    #[serde(default)]
    pub acc: Option<Account>,
    #[serde(default)]
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WalletAccounts {
    #[serde(default)]
    pub wallets: Vec<WalletAccount>,
}
