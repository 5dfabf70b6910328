//! Bot configuration settings and environment variable handling

use alloy::primitives::Address;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;

use crate::types::{SUMA, SWAP_ROUTER, USDC, USDC_WCBTC_POOL, WCBTC};

// Swap amount bounds, in human-readable USDC
pub const MIN_SWAP_AMOUNT: Decimal = dec!(0.0001);
pub const MAX_SWAP_AMOUNT: Decimal = dec!(0.0002);
pub const AMOUNT_DECIMALS: u32 = 6;

// Token decimal scales
pub const USDC_DECIMALS: u32 = 6;
pub const WCBTC_DECIMALS: u32 = 18;

// Fixed gas ceilings; estimation still runs before every swap
pub const APPROVE_GAS_LIMIT: u64 = 100_000;
pub const SWAP_GAS_LIMIT: u64 = 500_000;

// Router rejects the swap after this many seconds
pub const SWAP_DEADLINE_SECS: u64 = 20 * 60;

// Source-token approvals are sized at headroom x amount-in so that the next
// few swaps can skip the approval transaction entirely. An arbitrary
// over-approval choice, kept tunable rather than treated as an invariant.
pub const SOURCE_APPROVAL_HEADROOM: u64 = 2;

// Runner pacing
pub const DEFAULT_WALLET_DELAY_SECS: u64 = 2;
pub const DEFAULT_ROUND_DELAY_SECS: u64 = 30;
pub const MENU_ROUND_PAUSE_SECS: u64 = 300;

pub const DEFAULT_PREFERENCES_PATH: &str = "swapbot_config.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Network
    pub rpc_url: String,
    pub chain_id: u64,
    pub native_symbol: String,
    pub explorer_url: String,
    // Contracts (immutable after load)
    pub router: Address,
    pub pool: Address,
    pub usdc: Address,
    pub wcbtc: Address,
    pub suma: Address,
    // Runner pacing
    pub wallet_delay_secs: u64,
    pub round_delay_secs: u64,
    // Persistence
    pub preferences_path: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            rpc_url: env::var("RPC_URL")
                .unwrap_or_else(|_| "https://rpc.testnet.citrea.xyz".to_string()),
            chain_id: env::var("CHAIN_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5115),
            native_symbol: "cBTC".to_string(),
            explorer_url: env::var("EXPLORER_URL")
                .unwrap_or_else(|_| "https://explorer.testnet.citrea.xyz".to_string()),
            router: SWAP_ROUTER,
            pool: USDC_WCBTC_POOL,
            usdc: USDC,
            wcbtc: WCBTC,
            suma: SUMA,
            wallet_delay_secs: env::var("WALLET_DELAY_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_WALLET_DELAY_SECS),
            round_delay_secs: env::var("ROUND_DELAY_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_ROUND_DELAY_SECS),
            preferences_path: env::var("PREFERENCES_PATH")
                .unwrap_or_else(|_| DEFAULT_PREFERENCES_PATH.to_string()),
        }
    }

    pub fn tx_url(&self, hash: impl std::fmt::LowerHex) -> String {
        format!("{}/tx/0x{:x}", self.explorer_url, hash)
    }
}
