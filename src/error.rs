use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountCliError {
    #[error("invalid address")]
    InvalidAddress,
    #[error("execer name not allowed")]
    ExecNameNotAllowed,
    #[error("{0}")]
    Rpc(String),
    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No block header returned for height {height}")]
    EmptyHeaders { height: i64 },
    #[error("No account returned in balance reply")]
    EmptyBalance,
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AccountCliError>;
