//! Statistics error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// A weight value in a snapshot map was not a valid decimal amount.
    /// Fails the whole aggregation — coercing to zero would mask data
    /// corruption upstream.
    #[error("malformed weight for {account:?}: {value:?}")]
    MalformedWeight { account: String, value: String },

    /// A block count in a snapshot map was not a valid integer.
    #[error("malformed block count for {kind:?}: {value:?}")]
    MalformedCount { kind: String, value: String },
}
