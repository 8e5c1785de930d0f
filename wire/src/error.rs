//! Wire error types.

use thiserror::Error;

use pulse_stats::StatsError;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
