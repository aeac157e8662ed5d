use clap::Parser;
use rust_account_cli::account::AccountQueries;
use rust_account_cli::cli::account::handle_account_command;
use rust_account_cli::cli::{Cli, Commands};
use rust_account_cli::client::RpcClient;
use rust_account_cli::config::CliConfig;
use rust_account_cli::encoding::AmountCodec;
use rust_account_cli::error::Result;
use rust_account_cli::logging;
use std::time::Duration;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let loaded = CliConfig::load(&cli.config)?;
    let from_file = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(laddr) = cli.rpc_laddr {
        config.rpc.laddr = laddr;
        config.validate()?;
    }
    logging::init(&config.log_level);
    if !from_file {
        debug!(path = %cli.config.display(), "config file not found, using defaults");
    }
    debug!(laddr = %config.rpc.laddr, coin_unit = config.display.coin_unit, "config loaded");

    let client = RpcClient::new(
        config.rpc.laddr.clone(),
        Duration::from_secs(config.rpc.timeout_secs),
    )?;
    let queries = AccountQueries::new(&client, AmountCodec::new(config.display.coin_unit));

    let output = match cli.command {
        Commands::Account { cmd } => handle_account_command(cmd, &queries).await?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
