//! Shared error type for the explorer core.

use thiserror::Error;

/// Common error type for the Pulse explorer core.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("invalid account address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid block hash: {0:?}")]
    InvalidBlockHash(String),

    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),

    #[error("config error: {0}")]
    Config(String),
}
