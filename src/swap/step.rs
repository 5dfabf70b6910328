//! Single exact-input swap step
//!
//! Gas is always estimated first; a revert during estimation means the swap
//! is never submitted. Submission uses a fixed gas ceiling and the nonce
//! handed over by the preceding approval.

use alloy::primitives::{Address, U256, aliases::U160};
use alloy::rpc::types::eth::TransactionRequest;
use alloy::sol_types::SolCall;
use tracing::info;

use crate::{
    abi::{ExactInputSingleParams, ISwapRouter},
    chain::Chain,
    config::{Config, SWAP_DEADLINE_SECS, SWAP_GAS_LIMIT},
    errors::{BotError, BotResult},
    types::{SwapRequest, TxOutcome},
    wallet::Identity,
};

/// Unix deadline for swaps started now.
pub fn deadline_from_now() -> u64 {
    chrono::Utc::now().timestamp() as u64 + SWAP_DEADLINE_SECS
}

fn swap_calldata(owner: Address, request: &SwapRequest) -> Vec<u8> {
    // amountOutMinimum and limitSqrtPrice stay zero: no slippage protection,
    // matching the deployed behavior this bot reproduces
    let params = ExactInputSingleParams {
        tokenIn: request.token_in,
        tokenOut: request.token_out,
        deployer: Address::ZERO,
        recipient: owner,
        deadline: U256::from(request.deadline),
        amountIn: request.amount_in,
        amountOutMinimum: U256::ZERO,
        limitSqrtPrice: U160::ZERO,
    };
    ISwapRouter::exactInputSingleCall { params }.abi_encode()
}

pub async fn execute_swap<C: Chain>(
    chain: &C,
    identity: &Identity,
    config: &Config,
    request: &SwapRequest,
) -> BotResult<TxOutcome> {
    info!(
        "🔄 Swap {} -> {} | amountIn: {} | nonce: {}",
        request.token_in, request.token_out, request.amount_in, request.nonce
    );

    let data = swap_calldata(identity.address, request);
    let call = TransactionRequest::default()
        .to(config.router)
        .from(identity.address)
        .value(U256::ZERO)
        .input(data.into());

    // Never submit with a guessed gas limit; estimation failure ends the step
    let gas_estimate =
        chain
            .estimate_gas(&call)
            .await
            .map_err(|e| BotError::GasEstimation {
                router: config.router,
                message: "swap would revert".to_string(),
                source: e.into(),
            })?;
    info!("⛽ Estimated gas: {}", gas_estimate);

    let tx = call.nonce(request.nonce).gas_limit(SWAP_GAS_LIMIT.into());
    let outcome = chain.submit(identity, tx, "swap").await?;

    if outcome.succeeded() {
        info!("✅ Swap successful in block {:?}", outcome.block_number);
        Ok(outcome)
    } else {
        Err(BotError::Swap {
            message: format!(
                "swap {} -> {} reverted on-chain",
                request.token_in, request.token_out
            ),
            outcome: Some(outcome),
        })
    }
}
