//! Turns parsed account commands into node RPCs and display records.
//!
//! Every operation runs at most two sequential calls and stops at the first
//! failure. Address and executor checks run before anything goes on the wire.

use super::projector;
use super::types::{
    AllExecBalanceRecord, BalanceOutcome, BalanceRecord, PrivateKey, WalletEntry, WalletList,
};
use crate::address;
use crate::encoding::AmountCodec;
use crate::error::{AccountCliError, Result};
use crate::execer;
use crate::rpc::types::{
    Account, AllExecBalance, Headers, ReplyString, ReqAddr, ReqBalance, ReqBlocks,
    ReqNewAccount, ReqString, ReqWalletImportPrivkey, ReqWalletSetLabel, WalletAccount,
    WalletAccounts,
};
use crate::rpc::{invoke, RpcContext, RpcMethod};
use tracing::{debug, info};

/// Height value meaning "latest state".
pub const LATEST_HEIGHT: i64 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceQuery {
    pub addr: String,
    /// `None` asks for every executor the address holds funds under.
    pub exec: Option<String>,
    /// Negative for latest state.
    pub height: i64,
}

impl BalanceQuery {
    /// An empty executor string means none was given.
    pub fn new(addr: impl Into<String>, exec: Option<String>, height: i64) -> Self {
        Self {
            addr: addr.into(),
            exec: exec.filter(|e| !e.is_empty()),
            height,
        }
    }
}

pub struct AccountQueries<'a> {
    ctx: &'a dyn RpcContext,
    codec: AmountCodec,
}

impl<'a> AccountQueries<'a> {
    pub fn new(ctx: &'a dyn RpcContext, codec: AmountCodec) -> Self {
        Self { ctx, codec }
    }

    pub async fn dump_key(&self, addr: &str) -> Result<PrivateKey> {
        address::validate(addr)?;
        let req = ReqString { data: addr.to_string() };
        let reply: ReplyString = invoke(self.ctx, RpcMethod::DumpPrivkey, &req).await?;
        Ok(PrivateKey { data: reply.data })
    }

    pub async fn list(&self) -> Result<WalletList> {
        let reply: WalletAccounts = invoke(self.ctx, RpcMethod::GetAccounts, &()).await?;
        Ok(projector::project_wallet_list(&self.codec, &reply))
    }

    pub async fn import_key(&self, key: &str, label: &str) -> Result<WalletEntry> {
        let req = ReqWalletImportPrivkey {
            privkey: key.to_string(),
            label: label.to_string(),
        };
        let reply: WalletAccount = invoke(self.ctx, RpcMethod::ImportPrivkey, &req).await?;
        Ok(projector::project_wallet_account(&self.codec, &reply))
    }

    pub async fn create(&self, label: &str) -> Result<WalletEntry> {
        let req = ReqNewAccount { label: label.to_string() };
        let reply: WalletAccount = invoke(self.ctx, RpcMethod::NewAccount, &req).await?;
        Ok(projector::project_wallet_account(&self.codec, &reply))
    }

    pub async fn set_label(&self, addr: &str, label: &str) -> Result<WalletEntry> {
        address::validate(addr)?;
        let req = ReqWalletSetLabel {
            addr: addr.to_string(),
            label: label.to_string(),
        };
        let reply: WalletAccount = invoke(self.ctx, RpcMethod::SetLabel, &req).await?;
        Ok(projector::project_wallet_account(&self.codec, &reply))
    }

    pub async fn balance(&self, query: &BalanceQuery) -> Result<BalanceOutcome> {
        address::validate(&query.addr)?;

        let exec = match &query.exec {
            None => return self.all_exec_balance(&query.addr).await.map(BalanceOutcome::AllExec),
            Some(exec) => exec,
        };
        if !execer::is_allowed(exec) {
            return Err(AccountCliError::ExecNameNotAllowed);
        }

        let state_hash = if query.height >= 0 {
            self.state_hash_at(query.height).await?
        } else {
            String::new()
        };

        self.exec_balance(&query.addr, exec, state_hash)
            .await
            .map(BalanceOutcome::Single)
    }

    async fn all_exec_balance(&self, addr: &str) -> Result<AllExecBalanceRecord> {
        info!(addr, "querying balances across all executors");
        let req = ReqAddr { addr: addr.to_string() };
        let reply: AllExecBalance = invoke(self.ctx, RpcMethod::GetAllExecBalance, &req).await?;
        Ok(projector::project_all_exec(&self.codec, &reply))
    }

    /// The balance RPC addresses historical state by hash, so a height is first
    /// resolved through the header at exactly that height.
    async fn state_hash_at(&self, height: i64) -> Result<String> {
        let req = ReqBlocks {
            start: height,
            end: height,
            is_detail: false,
        };
        let reply: Headers = invoke(self.ctx, RpcMethod::GetHeaders, &req).await?;
        let header = reply
            .items
            .into_iter()
            .next()
            .ok_or(AccountCliError::EmptyHeaders { height })?;
        debug!(height, state_hash = %header.state_hash, "resolved state hash");
        Ok(header.state_hash)
    }

    async fn exec_balance(&self, addr: &str, exec: &str, state_hash: String) -> Result<BalanceRecord> {
        info!(addr, exec, historical = !state_hash.is_empty(), "querying balance");
        let req = ReqBalance {
            addresses: vec![addr.to_string()],
            execer: exec.to_string(),
            state_hash,
        };
        let reply: Vec<Account> = invoke(self.ctx, RpcMethod::GetBalance, &req).await?;
        projector::project_balance(&self.codec, exec, &reply)
    }
}
