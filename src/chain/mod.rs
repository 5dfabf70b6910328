//! Chain access: JSON-RPC client and the trait the swap pipeline works
//! against

pub mod client;
pub mod retry;

pub use client::*;
pub use retry::*;

use alloy::primitives::{Address, U256};
use alloy::rpc::types::eth::TransactionRequest;

use crate::errors::BotResult;
use crate::types::TxOutcome;
use crate::wallet::Identity;

/// The node operations the swap pipeline needs. `ChainClient` is the real
/// implementation; tests substitute an in-memory chain.
///
/// No retries happen at this layer. A failed call is surfaced to the caller,
/// which decides whether the turn ends.
#[allow(async_fn_in_trait)]
pub trait Chain {
    async fn balance_of(&self, token: Address, owner: Address) -> BotResult<U256>;

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> BotResult<U256>;

    /// Current on-chain transaction count, used as the next nonce.
    async fn transaction_count(&self, owner: Address) -> BotResult<u64>;

    async fn pool_reserves(&self, pool: Address) -> BotResult<(u128, u128)>;

    /// Simulate the call and return a gas estimate. A revert here means the
    /// transaction must not be submitted.
    async fn estimate_gas(&self, tx: &TransactionRequest) -> BotResult<u64>;

    /// Sign with the identity's key, submit raw, and block until the node
    /// returns a receipt.
    async fn submit(
        &self,
        identity: &Identity,
        tx: TransactionRequest,
        context: &str,
    ) -> BotResult<TxOutcome>;
}
