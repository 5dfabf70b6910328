//! Satsuma Swap Bot - Automated swap cycling on Citrea testnet
//!
//! Repeatedly swaps USDC -> WCBTC -> SUMA through the Satsuma router with
//! strict per-identity nonce sequencing, allowance checks before every swap,
//! and a persisted transaction-count preference.

pub mod abi;
pub mod chain;
pub mod config;
pub mod errors;
pub mod runner;
pub mod storage;
pub mod swap;
pub mod types;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use config::{CONFIG, Config};
pub use errors::{BotError, BotResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
