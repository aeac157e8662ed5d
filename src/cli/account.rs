use crate::account::{AccountQueries, BalanceQuery, LATEST_HEIGHT};
use crate::error::Result;
use crate::execer::exec_flag_help;
use clap::Subcommand;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommands {
    /// Dump private key for account address
    #[command(name = "dump_key")]
    DumpKey {
        /// address of account
        #[arg(short, long)]
        addr: String,
    },
    /// Get account list
    List,
    /// Get balance of a account address
    Balance {
        /// account addr
        #[arg(short, long)]
        addr: String,
        #[arg(short, long, help = exec_flag_help())]
        exec: Option<String>,
        /// block height
        #[arg(long, default_value_t = LATEST_HEIGHT, allow_negative_numbers = true)]
        height: i64,
    },
    /// Import private key with label
    #[command(name = "import_key")]
    ImportKey {
        /// private key
        #[arg(short, long)]
        key: String,
        /// label for private key
        #[arg(short, long)]
        label: String,
    },
    /// Create a new account with label
    Create {
        /// account label
        #[arg(short, long)]
        label: String,
    },
    /// Set label for account address
    #[command(name = "set_label")]
    SetLabel {
        /// account address
        #[arg(short, long)]
        addr: String,
        /// account label
        #[arg(short, long)]
        label: String,
    },
}

impl AccountCommands {
    pub fn name(&self) -> &'static str {
        match self {
            AccountCommands::DumpKey { .. } => "dump_key",
            AccountCommands::List => "list",
            AccountCommands::Balance { .. } => "balance",
            AccountCommands::ImportKey { .. } => "import_key",
            AccountCommands::Create { .. } => "create",
            AccountCommands::SetLabel { .. } => "set_label",
        }
    }
}

/// Runs one account command and returns its result ready for printing.
pub async fn handle_account_command(cmd: AccountCommands, queries: &AccountQueries<'_>) -> Result<Value> {
    info!(command = cmd.name(), "running account command");
    let output = match cmd {
        AccountCommands::DumpKey { addr } => serde_json::to_value(queries.dump_key(&addr).await?)?,
        AccountCommands::List => serde_json::to_value(queries.list().await?)?,
        AccountCommands::Balance { addr, exec, height } => {
            let query = BalanceQuery::new(addr, exec, height);
            serde_json::to_value(queries.balance(&query).await?)?
        }
        AccountCommands::ImportKey { key, label } => {
            serde_json::to_value(queries.import_key(&key, &label).await?)?
        }
        AccountCommands::Create { label } => serde_json::to_value(queries.create(&label).await?)?,
        AccountCommands::SetLabel { addr, label } => {
            serde_json::to_value(queries.set_label(&addr, &label).await?)?
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{encode_for_test, NORMAL_VERSION};
    use crate::encoding::AmountCodec;
    use crate::error::AccountCliError;
    use crate::rpc::mock::MockRpc;
    use serde_json::json;

    #[tokio::test]
    async fn test_balance_output_shape() {
        let a1 = encode_for_test(NORMAL_VERSION, [0x22; 20]);
        let rpc = MockRpc::new()
            .reply(json!({"items": [{"stateHash": "H"}]}))
            .reply(json!([{"addr": a1, "balance": 99_990_000, "frozen": 0}]));
        let queries = AccountQueries::new(&rpc, AmountCodec::new(10_000));
        let cmd = AccountCommands::Balance {
            addr: a1.clone(),
            exec: Some("coins".to_string()),
            height: 50,
        };

        let output = handle_account_command(cmd, &queries).await.unwrap();
        assert_eq!(
            output,
            json!({
                "addr": a1,
                "execer": "coins",
                "currency": 0,
                "balance": "9999.0000",
                "frozen": "0.0000"
            })
        );
    }

    #[tokio::test]
    async fn test_all_exec_output_shape() {
        let a1 = encode_for_test(NORMAL_VERSION, [0x22; 20]);
        let rpc = MockRpc::new().reply(json!({
            "addr": a1,
            "execAccount": [{"execer": "coins", "account": {"addr": a1, "balance": 10_000, "frozen": 0}}]
        }));
        let queries = AccountQueries::new(&rpc, AmountCodec::new(10_000));
        let cmd = AccountCommands::Balance { addr: a1.clone(), exec: None, height: LATEST_HEIGHT };

        let output = handle_account_command(cmd, &queries).await.unwrap();
        assert_eq!(
            output,
            json!({
                "addr": a1,
                "execAccount": [
                    {"execer": "coins", "account": {"currency": 0, "balance": "1.0000", "frozen": "0.0000"}}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_list_output_shape() {
        let rpc = MockRpc::new().reply(json!({
            "wallets": [{"acc": {"addr": "A", "balance": 5_000, "frozen": 0}, "label": "main"}]
        }));
        let queries = AccountQueries::new(&rpc, AmountCodec::new(10_000));
        let output = handle_account_command(AccountCommands::List, &queries).await.unwrap();
        assert_eq!(
            output,
            json!({
                "wallets": [
                    {"acc": {"addr": "A", "currency": 0, "balance": "0.5000", "frozen": "0.0000"}, "label": "main"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_validation_error_passes_through() {
        let rpc = MockRpc::new();
        let queries = AccountQueries::new(&rpc, AmountCodec::default());
        let cmd = AccountCommands::DumpKey { addr: "bogus".to_string() };
        let err = handle_account_command(cmd, &queries).await.unwrap_err();
        assert!(matches!(err, AccountCliError::InvalidAddress));
        assert_eq!(err.to_string(), "invalid address");
    }
}
