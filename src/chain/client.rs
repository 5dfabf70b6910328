//! JSON-RPC chain client

use alloy::{
    eips::eip2718::Encodable2718,
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::eth::TransactionRequest,
    sol_types::SolCall,
};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use crate::{
    ConcreteProvider,
    abi::{IAlgebraPool, IERC20},
    chain::{Chain, RetryConfig, retry_with_backoff},
    config::Config,
    errors::{BotError, BotResult},
    types::TxOutcome,
    wallet::Identity,
};

/// One HTTP connection to a Citrea node plus the chain constants needed to
/// sign for it.
#[derive(Debug)]
pub struct ChainClient {
    provider: Arc<ConcreteProvider>,
    chain_id: u64,
    explorer_url: String,
}

impl ChainClient {
    /// Connect and probe the node with a block-number read. Unreachable or
    /// unresponsive nodes are a fatal error; the caller aborts the program.
    pub async fn connect(config: &Config) -> BotResult<Self> {
        let url = config.rpc_url.parse().map_err(|e| BotError::Connection {
            endpoint: config.rpc_url.clone(),
            message: "Invalid RPC URL".to_string(),
            source: Some(anyhow::Error::new(e)),
        })?;

        let provider: Arc<ConcreteProvider> =
            Arc::new(ProviderBuilder::new().on_http(url).boxed());

        info!("🔗 Testing connection to {}...", config.rpc_url);
        let block = retry_with_backoff(
            || async {
                provider
                    .get_block_number()
                    .await
                    .context("Failed to get block number")
            },
            &RetryConfig {
                max_attempts: 5,
                initial_delay_ms: 500,
                max_delay_ms: 10000,
                exponential_base: 2.0,
            },
            "Citrea node connection",
        )
        .await
        .map_err(|e| BotError::Connection {
            endpoint: config.rpc_url.clone(),
            message: "Node unreachable".to_string(),
            source: Some(e.into()),
        })?;

        info!(
            "✅ Connected to {} (chain id {}) at block {}",
            config.rpc_url, config.chain_id, block
        );

        Ok(Self {
            provider,
            chain_id: config.chain_id,
            explorer_url: config.explorer_url.clone(),
        })
    }

    async fn view(&self, to: Address, data: Vec<u8>, context: &str) -> BotResult<Bytes> {
        let tx = TransactionRequest::default().to(to).input(data.into());
        self.provider
            .call(&tx)
            .await
            .map_err(|e| BotError::rpc(context, e))
    }
}

impl Chain for ChainClient {
    async fn balance_of(&self, token: Address, owner: Address) -> BotResult<U256> {
        let data = IERC20::balanceOfCall { owner }.abi_encode();
        let raw = self.view(token, data, "balanceOf").await?;
        let decoded = IERC20::balanceOfCall::abi_decode_returns(&raw, true)
            .map_err(|e| BotError::rpc("balanceOf decode", e))?;
        Ok(decoded._0)
    }

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> BotResult<U256> {
        let data = IERC20::allowanceCall { owner, spender }.abi_encode();
        let raw = self.view(token, data, "allowance").await?;
        let decoded = IERC20::allowanceCall::abi_decode_returns(&raw, true)
            .map_err(|e| BotError::rpc("allowance decode", e))?;
        Ok(decoded._0)
    }

    async fn transaction_count(&self, owner: Address) -> BotResult<u64> {
        self.provider
            .get_transaction_count(owner)
            .await
            .map_err(|e| BotError::rpc("transaction count", e))
    }

    async fn pool_reserves(&self, pool: Address) -> BotResult<(u128, u128)> {
        let data = IAlgebraPool::getReservesCall {}.abi_encode();
        let raw = self.view(pool, data, "getReserves").await?;
        let decoded = IAlgebraPool::getReservesCall::abi_decode_returns(&raw, true)
            .map_err(|e| BotError::rpc("getReserves decode", e))?;
        Ok((decoded._0, decoded._1))
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> BotResult<u64> {
        let gas = self
            .provider
            .estimate_gas(tx)
            .await
            .map_err(|e| BotError::rpc("gas estimation", e))?;
        Ok(gas as u64)
    }

    async fn submit(
        &self,
        identity: &Identity,
        tx: TransactionRequest,
        context: &str,
    ) -> BotResult<TxOutcome> {
        // Provider-default gas price; no fee strategy of our own
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| BotError::rpc("gas price", e))?;

        let envelope = tx
            .with_chain_id(self.chain_id)
            .with_gas_price(gas_price)
            .build(identity.wallet())
            .await
            .map_err(|e| BotError::rpc(format!("signing {}", context), e))?;

        let pending = self
            .provider
            .send_raw_transaction(&envelope.encoded_2718())
            .await
            .map_err(|e| BotError::rpc(format!("submitting {}", context), e))?;

        let hash = *pending.tx_hash();
        info!("📡 Submitted {}: {}/tx/{}", context, self.explorer_url, hash);

        info!("⏳ Waiting for {} confirmation...", context);
        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| BotError::rpc(format!("awaiting receipt for {}", context), e))?;

        Ok(TxOutcome {
            hash: receipt.transaction_hash,
            status: receipt.status(),
            gas_used: receipt.gas_used as u128,
            block_number: receipt.block_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Mock, ServerGuard};

    /// Mock one JSON-RPC method, echoing the request id back.
    async fn rpc_mock(server: &mut ServerGuard, method: &str, result: &'static str) -> Mock {
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJsonString(format!(
                r#"{{"method":"{}"}}"#,
                method
            )))
            .with_header("content-type", "application/json")
            .with_body_from_request(move |request| {
                let body: serde_json::Value =
                    serde_json::from_slice(request.body().unwrap()).unwrap();
                format!(
                    r#"{{"jsonrpc":"2.0","id":{},"result":"{}"}}"#,
                    body["id"], result
                )
                .into_bytes()
            })
            .create_async()
            .await
    }

    #[tokio::test]
    async fn connect_probes_block_number() {
        let mut server = mockito::Server::new_async().await;
        let mock = rpc_mock(&mut server, "eth_blockNumber", "0x10").await;

        let mut config = Config::load();
        config.rpc_url = server.url();
        let client = ChainClient::connect(&config).await.unwrap();
        assert_eq!(client.chain_id, config.chain_id);
        mock.assert_async().await;
    }

    #[tokio::test(start_paused = true)]
    async fn connect_fails_when_node_is_down() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .expect_at_least(1)
            .create_async()
            .await;

        let mut config = Config::load();
        config.rpc_url = server.url();
        let err = ChainClient::connect(&config).await.unwrap_err();
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn balance_of_decodes_uint256() {
        let mut server = mockito::Server::new_async().await;
        rpc_mock(&mut server, "eth_blockNumber", "0x10").await;
        rpc_mock(
            &mut server,
            "eth_call",
            "0x000000000000000000000000000000000000000000000000000000000016e360",
        )
        .await;

        let mut config = Config::load();
        config.rpc_url = server.url();
        let client = ChainClient::connect(&config).await.unwrap();

        let balance = client.balance_of(config.usdc, Address::ZERO).await.unwrap();
        assert_eq!(balance, U256::from(1_500_000u64));
    }
}
