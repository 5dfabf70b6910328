//! Swap pipeline types

use alloy::primitives::{Address, B256, U256};
use serde::Serialize;

/// Result of an allowance check, consumed by the swap that follows it.
///
/// `next_nonce` is the nonce the next transaction for this identity must
/// use: the account's transaction count as read during the check, plus one
/// if an approval transaction was actually mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalTicket {
    pub next_nonce: u64,
    /// Whether an approval transaction was submitted, or the existing
    /// allowance already covered the requirement.
    pub submitted: bool,
}

/// One exact-input swap through the router.
#[derive(Debug, Clone)]
pub struct SwapRequest {
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub nonce: u64,
    /// Unix timestamp after which the router rejects the swap.
    pub deadline: u64,
}

/// Outcome of a mined transaction, distilled from the node's receipt.
#[derive(Debug, Clone, Serialize)]
pub struct TxOutcome {
    pub hash: B256,
    pub status: bool,
    pub gas_used: u128,
    pub block_number: Option<u64>,
}

impl TxOutcome {
    pub fn succeeded(&self) -> bool {
        self.status
    }
}
