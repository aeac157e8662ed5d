//! Account commands against a remote node
//!
//! - `query` - which RPCs a command issues, and in what order
//! - `projector` - node replies to display records
//! - `types` - the display records themselves

pub mod projector;
pub mod query;
pub mod types;

pub use query::{AccountQueries, BalanceQuery, LATEST_HEIGHT};
pub use types::{AllExecBalanceRecord, BalanceOutcome, BalanceRecord, WalletEntry, WalletList};
