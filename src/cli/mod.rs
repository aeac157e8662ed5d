pub mod account;

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "account_cli")]
#[command(about = "Wallet and account client for a remote node", long_about = None)]
pub struct Cli {
    /// HTTP address of the node's JSON-RPC endpoint (overrides the config file)
    #[arg(long = "rpc_laddr", global = true)]
    pub rpc_laddr: Option<String>,

    /// Path to the TOML config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account management
    Account {
        #[command(subcommand)]
        cmd: account::AccountCommands,
    },
}
