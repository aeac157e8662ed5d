//! Pure transforms from node replies to display records.

use super::types::{
    AllExecBalanceRecord, BalanceRecord, ExecBalanceRecord, WalletEntry, WalletList,
};
use crate::encoding::AmountCodec;
use crate::error::{AccountCliError, Result};
use crate::rpc::types::{Account, AllExecBalance, WalletAccount, WalletAccounts};

pub fn decode_account(codec: &AmountCodec, acc: &Account) -> BalanceRecord {
    BalanceRecord {
        addr: acc.addr.clone(),
        execer: None,
        currency: acc.currency,
        balance: codec.decode(acc.balance),
        frozen: codec.decode(acc.frozen),
    }
}

/// Account-management replies (create, import, set label) all share this shape.
pub fn project_wallet_account(codec: &AmountCodec, reply: &WalletAccount) -> WalletEntry {
    let acc = reply.acc.clone().unwrap_or_default();
    WalletEntry {
        acc: decode_account(codec, &acc),
        label: reply.label.clone(),
    }
}

pub fn project_wallet_list(codec: &AmountCodec, reply: &WalletAccounts) -> WalletList {
    WalletList {
        wallets: reply
            .wallets
            .iter()
            .map(|w| project_wallet_account(codec, w))
            .collect(),
    }
}

pub fn project_balances(codec: &AmountCodec, execer: &str, reply: &[Account]) -> Vec<BalanceRecord> {
    reply
        .iter()
        .map(|acc| BalanceRecord {
            execer: Some(execer.to_string()),
            ..decode_account(codec, acc)
        })
        .collect()
}

/// Single-address balance query: only the first account in the reply counts.
pub fn project_balance(codec: &AmountCodec, execer: &str, reply: &[Account]) -> Result<BalanceRecord> {
    project_balances(codec, execer, reply)
        .into_iter()
        .next()
        .ok_or(AccountCliError::EmptyBalance)
}

pub fn project_all_exec(codec: &AmountCodec, reply: &AllExecBalance) -> AllExecBalanceRecord {
    let exec_account = reply
        .exec_account
        .iter()
        .map(|entry| ExecBalanceRecord {
            execer: entry.execer.clone(),
            // the address is already on the outer record
            account: BalanceRecord {
                addr: String::new(),
                ..decode_account(codec, &entry.account)
            },
        })
        .collect();

    AllExecBalanceRecord {
        addr: reply.addr.clone(),
        exec_account,
    }
}
