//! Signing identities loaded from the environment
//!
//! Keys come from `PRIVATE_KEY_1`, `PRIVATE_KEY_2`, ... in `.env`. Each
//! identity is processed strictly sequentially, so no state is shared
//! between them.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use std::env;
use std::str::FromStr;
use tracing::info;

use crate::errors::{BotError, BotResult};

/// One signing key and its derived address.
#[derive(Debug, Clone)]
pub struct Identity {
    pub address: Address,
    wallet: EthereumWallet,
}

impl Identity {
    pub fn from_key(key: &str) -> BotResult<Self> {
        let signer = PrivateKeySigner::from_str(key.trim()).map_err(|e| BotError::Config {
            message: format!("Invalid private key: {}", e),
        })?;
        let address = signer.address();
        Ok(Self {
            address,
            wallet: EthereumWallet::from(signer),
        })
    }

    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }
}

/// Load `PRIVATE_KEY_1..N` until the first missing index. At least one key
/// is required; a malformed key is fatal.
pub fn load_identities() -> BotResult<Vec<Identity>> {
    let mut identities = Vec::new();
    let mut index = 1;

    while let Ok(key) = env::var(format!("PRIVATE_KEY_{}", index)) {
        identities.push(Identity::from_key(&key)?);
        index += 1;
    }

    if identities.is_empty() {
        return Err(BotError::Config {
            message: "No private key found; set PRIVATE_KEY_1 in .env".to_string(),
        });
    }

    info!("✅ Loaded {} private key(s)", identities.len());
    Ok(identities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_key() {
        let err = Identity::from_key("not-a-key").unwrap_err();
        assert!(matches!(err, BotError::Config { .. }));
    }

    #[test]
    fn parses_well_known_key() {
        // Hardhat/Anvil dev key 0; address is a fixed derivation
        let id = Identity::from_key(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .unwrap();
        assert_eq!(
            id.address,
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );
    }
}
