//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable console output.
    Human,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse a config value ("human" or "json"). Unknown values fall back to
    /// human output.
    pub fn from_config(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            _ => Self::Human,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `level` is the default filter ("trace" through "error"); the `RUST_LOG`
/// environment variable overrides it when set.
pub fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    match format {
        LogFormat::Human => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}
