//! Custom error types for the bot

use alloy::primitives::Address;
use thiserror::Error;

use crate::types::TxOutcome;

/// Failure taxonomy for the swap pipeline.
///
/// `Connection` and `Config` are fatal and terminate the process. Everything
/// else is scoped to one identity's turn: the runner logs it and moves on to
/// the next identity.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Node connection failed: {endpoint} - {message}")]
    Connection {
        endpoint: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Insufficient {symbol} balance: need {needed}, have {available}")]
    InsufficientFunds {
        symbol: &'static str,
        needed: String,
        available: String,
    },

    #[error("Token approval failed: {token} - {message}")]
    Approval {
        token: Address,
        message: String,
        outcome: Option<TxOutcome>,
    },

    #[error("Gas estimation failed for swap via {router}: {message}")]
    GasEstimation {
        router: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Swap transaction failed: {message}")]
    Swap {
        message: String,
        outcome: Option<TxOutcome>,
    },

    #[error("RPC error during {context}")]
    Rpc {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type BotResult<T> = Result<T, BotError>;

impl BotError {
    /// Fatal errors abort the whole process; everything else only ends the
    /// current identity's turn.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BotError::Connection { .. } | BotError::Config { .. })
    }

    pub fn rpc(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        BotError::Rpc {
            context: context.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        let conn = BotError::Connection {
            endpoint: "http://localhost:8545".to_string(),
            message: "refused".to_string(),
            source: None,
        };
        assert!(conn.is_fatal());

        let funds = BotError::InsufficientFunds {
            symbol: "USDC",
            needed: "200".to_string(),
            available: "0".to_string(),
        };
        assert!(!funds.is_fatal());
    }
}
