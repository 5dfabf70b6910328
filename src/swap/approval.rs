//! Token approval step
//!
//! Ensures the router may spend at least `required` of a token before a
//! swap, submitting an `approve` transaction only when the existing
//! allowance falls short. The returned ticket carries the nonce the
//! following swap must use.

use alloy::primitives::{Address, U256};
use alloy::rpc::types::eth::TransactionRequest;
use alloy::sol_types::SolCall;
use tracing::info;

use crate::{
    abi::IERC20,
    chain::Chain,
    config::APPROVE_GAS_LIMIT,
    errors::{BotError, BotResult},
    types::ApprovalTicket,
    wallet::Identity,
};

pub async fn ensure_allowance<C: Chain>(
    chain: &C,
    identity: &Identity,
    token: Address,
    spender: Address,
    required: U256,
) -> BotResult<ApprovalTicket> {
    let owner = identity.address;
    let nonce = chain.transaction_count(owner).await?;
    info!(
        "🔍 Checking allowance of {} for {} (nonce {})",
        token, owner, nonce
    );

    let allowance = chain.allowance(token, owner, spender).await?;
    if allowance >= required {
        info!("✅ Sufficient token allowance already exists");
        return Ok(ApprovalTicket {
            next_nonce: nonce,
            submitted: false,
        });
    }

    info!("📝 Approving {} to spend {} of {}", spender, required, token);
    let data = IERC20::approveCall {
        spender,
        amount: required,
    }
    .abi_encode();
    let tx = TransactionRequest::default()
        .to(token)
        .from(owner)
        .input(data.into())
        .nonce(nonce)
        .gas_limit(APPROVE_GAS_LIMIT.into());

    let outcome = chain
        .submit(identity, tx, "token approval")
        .await
        .map_err(|e| BotError::Approval {
            token,
            message: format!("approval submission errored: {}", e),
            outcome: None,
        })?;

    if outcome.succeeded() {
        info!("✅ Token approval successful");
        Ok(ApprovalTicket {
            next_nonce: nonce + 1,
            submitted: true,
        })
    } else {
        Err(BotError::Approval {
            token,
            message: "approval transaction reverted".to_string(),
            outcome: Some(outcome),
        })
    }
}
