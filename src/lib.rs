pub mod account; // balance lookups, wallet management, reply projection
pub mod address;
pub mod cli;
pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod execer;
pub mod logging;
pub mod rpc;
