//! Citrea testnet contract addresses

use alloy::primitives::{Address, address};

// Satsuma DEX contracts on Citrea testnet (chain id 5115)
pub const SWAP_ROUTER: Address = address!("3012e9049d05b4b5369d690114d5a5861ebb85cb");
pub const USDC_WCBTC_POOL: Address = address!("080c376e6aB309fF1a861e1c3F91F27b8D4f1443");

// Tokens
pub const USDC: Address = address!("2C8abD2A528D19AFc33d2eBA507c0F405c131335");
pub const WCBTC: Address = address!("8d0c9d1c17ae5e40fff9be350f57840e9e66cd93");
pub const SUMA: Address = address!("dE4251dd68e1aD5865b14Dd527E54018767Af58a");
