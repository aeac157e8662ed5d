use crate::encoding::DEFAULT_COIN_UNIT;
use crate::error::{AccountCliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "account_cli.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CliConfig {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RpcConfig {
    #[serde(default = "default_laddr")]
    pub laddr: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Smallest ledger units per whole coin.
    #[serde(default = "default_coin_unit")]
    pub coin_unit: i64,
}

fn default_laddr() -> String {
    "http://localhost:8801".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_coin_unit() -> i64 {
    DEFAULT_COIN_UNIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            laddr: default_laddr(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            coin_unit: default_coin_unit(),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            display: DisplayConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Reads `path` if it exists. `None` means there is no file; it is never
    /// created.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AccountCliError::Config(format!("reading {}: {}", path.display(), e)))?;
        Self::from_toml(&raw).map(Some)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| AccountCliError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.coin_unit <= 0 {
            return Err(AccountCliError::Config(format!(
                "display.coin_unit must be positive, got {}",
                self.display.coin_unit
            )));
        }
        if self.rpc.laddr.is_empty() {
            return Err(AccountCliError::Config("rpc.laddr must not be empty".to_string()));
        }
        Ok(())
    }
}
