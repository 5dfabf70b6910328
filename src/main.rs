//! Satsuma Swap Bot - Main Entry Point
//!
//! Menu-driven swap cycling against the Satsuma DEX on Citrea testnet

use anyhow::Result;
use satsuma_swap_bot::*;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::utils::MenuChoice;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    utils::display_banner();

    // Load configuration
    let config = CONFIG.clone();

    info!("📋 Configuration:");
    info!("   RPC: {}", config.rpc_url);
    info!(
        "   Chain ID: {} (native {})",
        config.chain_id, config.native_symbol
    );
    info!("   Router: {}", config.router);
    info!("   Pool: {}", config.pool);
    info!(
        "   Swap amounts: {} - {} USDC",
        config::MIN_SWAP_AMOUNT,
        config::MAX_SWAP_AMOUNT
    );

    // Connection or credential failures are the only fatal ones
    let client = chain::ChainClient::connect(&config).await?;
    let identities = wallet::load_identities()?;
    let mut transaction_count = storage::load_transaction_count(&config.preferences_path);

    loop {
        let choice = match utils::display_menu()? {
            Some(choice) => choice,
            None => {
                warn!("- Invalid option. Please select 1-4.");
                continue;
            }
        };

        match choice {
            MenuChoice::Exit => {
                info!("👋 Exiting Satsuma swap bot...");
                return Ok(());
            }
            MenuChoice::SetTransactionCount => {
                let count = utils::prompt_positive_count("> Enter Number of Transactions: ")?;
                if let Err(e) = storage::save_transaction_count(&config.preferences_path, count)
                {
                    error!("- Error saving transaction count: {}", e);
                }
                transaction_count = count;
            }
            MenuChoice::StartTransactions => {
                if transaction_count == 0 {
                    warn!("- Transaction count not set. Please set transaction count first.");
                    continue;
                }
                info!("=== Starting Swap Transactions ===");
                run_batch(&client, &config, &identities, transaction_count).await;
                info!("⏸  Waiting 5 minutes before next round...");
                tokio::time::sleep(Duration::from_secs(config::MENU_ROUND_PAUSE_SECS)).await;
            }
            MenuChoice::ManualSwap => {
                let count = utils::prompt_positive_count("> Enter Number of Swaps: ")?;
                info!("=== Starting Manual Swap ===");
                run_batch(&client, &config, &identities, count).await;
            }
        }
    }
}

/// One full batch: `count` indices across all identities. Per-turn failures
/// are logged here and never stop the schedule.
async fn run_batch(
    client: &chain::ChainClient,
    config: &Config,
    identities: &[wallet::Identity],
    count: u32,
) {
    info!("=== Starting transaction round ===");
    info!(
        "+ Performing {} transactions with random amounts ({}-{} USDC)",
        count,
        config::MIN_SWAP_AMOUNT,
        config::MAX_SWAP_AMOUNT
    );

    let mut runner = runner::RoundRunner::from_config(config);
    runner
        .run(count, identities, |identity| async move {
            if let Err(e) = swap::run_swap_chain(client, config, &identity).await {
                error!("❌ Swap chain aborted for {}: {}", identity.address, e);
                if let BotError::Swap {
                    outcome: Some(outcome),
                    ..
                }
                | BotError::Approval {
                    outcome: Some(outcome),
                    ..
                } = &e
                {
                    error!("   Receipt: {:?}", outcome);
                }
            }
        })
        .await;
}
