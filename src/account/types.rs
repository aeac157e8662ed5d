//! Display records produced by the account commands.
//!
//! Amounts are already decoded into fixed four-decimal strings; nothing here
//! carries raw ledger integers. Field names match what the node's own tooling
//! prints so scripts parsing either output keep working.

use serde::Serialize;

/// One account's balance, decoded for display.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BalanceRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub addr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execer: Option<String>,
    pub currency: i32,
    pub balance: String,
    pub frozen: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExecBalanceRecord {
    pub execer: String,
    pub account: BalanceRecord,
}

/// Balances of one address across every executor it holds funds under, in
/// the order the node returned them.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AllExecBalanceRecord {
    pub addr: String,
    #[serde(rename = "execAccount")]
    pub exec_account: Vec<ExecBalanceRecord>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WalletEntry {
    pub acc: BalanceRecord,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct WalletList {
    pub wallets: Vec<WalletEntry>,
}

/// Result of `balance`: which shape depends on whether an executor was named.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum BalanceOutcome {
    AllExec(AllExecBalanceRecord),
    Single(BalanceRecord),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PrivateKey {
    pub data: String,
}
