//! Two-hop swap chain for one identity
//!
//! USDC -> WCBTC with a freshly generated random amount, then WCBTC -> SUMA
//! with the entire WCBTC balance. Each hop is gated by its approval, and a
//! hop never starts before the previous receipt is known. No step is
//! retried; any failure ends this identity's turn.

use alloy::primitives::U256;
use tracing::{info, warn};

use crate::{
    chain::Chain,
    config::{Config, SOURCE_APPROVAL_HEADROOM, USDC_DECIMALS, WCBTC_DECIMALS},
    errors::{BotError, BotResult},
    swap::{
        amount::{from_base_units, generate_swap_amount, to_base_units},
        approval::ensure_allowance,
        step::{deadline_from_now, execute_swap},
    },
    types::SwapRequest,
    wallet::Identity,
};

/// Informational only; no decision is taken from reserve values.
async fn log_pool_reserves<C: Chain>(chain: &C, config: &Config) {
    match chain.pool_reserves(config.pool).await {
        Ok((r0, r1)) => info!(
            "💧 Pool reserves: {} USDC / {} WCBTC",
            from_base_units(U256::from(r0), USDC_DECIMALS),
            from_base_units(U256::from(r1), WCBTC_DECIMALS),
        ),
        Err(e) => warn!("⚠️ Failed to fetch pool reserves: {}", e),
    }
}

pub async fn run_swap_chain<C: Chain>(
    chain: &C,
    config: &Config,
    identity: &Identity,
) -> BotResult<()> {
    info!("=== Processing swap chain for {} ===", identity.address);

    let amount = generate_swap_amount();
    let amount_in = to_base_units(amount, USDC_DECIMALS);
    info!("🎲 Random amount generated: {} USDC", amount);

    let balance = chain.balance_of(config.usdc, identity.address).await?;
    info!(
        "💰 USDC balance: {}",
        from_base_units(balance, USDC_DECIMALS)
    );
    if balance < amount_in {
        return Err(BotError::InsufficientFunds {
            symbol: "USDC",
            needed: amount.to_string(),
            available: from_base_units(balance, USDC_DECIMALS).to_string(),
        });
    }

    log_pool_reserves(chain, config).await;

    // Over-approve so the next few turns can skip the approval transaction
    let approval_amount = amount_in * U256::from(SOURCE_APPROVAL_HEADROOM);
    let ticket = ensure_allowance(chain, identity, config.usdc, config.router, approval_amount)
        .await?;

    // One deadline for both hops of this turn
    let deadline = deadline_from_now();

    execute_swap(
        chain,
        identity,
        config,
        &SwapRequest {
            token_in: config.usdc,
            token_out: config.wcbtc,
            amount_in,
            nonce: ticket.next_nonce,
            deadline,
        },
    )
    .await?;

    let wcbtc_balance = chain.balance_of(config.wcbtc, identity.address).await?;
    info!(
        "💰 WCBTC balance: {}",
        from_base_units(wcbtc_balance, WCBTC_DECIMALS)
    );
    if wcbtc_balance.is_zero() {
        warn!("⚠️ No WCBTC received, skipping WCBTC -> SUMA swap");
        return Ok(());
    }

    // Second hop spends everything the first one produced
    let ticket = ensure_allowance(chain, identity, config.wcbtc, config.router, wcbtc_balance)
        .await?;

    execute_swap(
        chain,
        identity,
        config,
        &SwapRequest {
            token_in: config.wcbtc,
            token_out: config.suma,
            amount_in: wcbtc_balance,
            nonce: ticket.next_nonce,
            deadline,
        },
    )
    .await?;

    info!("🏁 Swap chain completed for {}", identity.address);
    Ok(())
}
