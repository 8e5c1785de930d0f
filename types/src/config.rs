//! Explorer network configuration with TOML file support.
//!
//! Loaded once at process start and treated as read-only afterwards. The
//! policy constants the status view depends on — rebroadcast threshold
//! multiplier, display rounding — are explicit fields here rather than
//! literals buried in the computation.

use serde::{Deserialize, Serialize};

use crate::error::PulseError;
use crate::weight::Weight;

/// The currency the explorer is pointed at: display symbol plus the set of
/// address prefixes its account encoding accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Accepted address prefixes, e.g. `["nano", "xrb"]`.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

/// Fractional digits used when rendering amounts and percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPolicy {
    /// Digits for absolute coin amounts.
    #[serde(default)]
    pub amount_digits: u32,

    /// Digits for percentages.
    #[serde(default = "default_percent_digits")]
    pub percent_digits: u32,
}

/// Configuration for the Pulse explorer core.
///
/// Can be loaded from a TOML file via [`NetworkConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Maximum coin supply of the network, in coins.
    #[serde(default = "default_max_supply")]
    pub max_supply: Weight,

    #[serde(default)]
    pub currency: CurrencyInfo,

    /// Rebroadcast threshold as basis points of max supply (10 = 0.1%).
    /// Votes from representatives below this weight are not worth relaying.
    #[serde(default = "default_threshold_bps")]
    pub rebroadcast_threshold_bps: u32,

    #[serde(default)]
    pub display: DisplayPolicy,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_symbol() -> String {
    "NANO".to_string()
}

fn default_prefixes() -> Vec<String> {
    vec!["nano".to_string(), "xrb".to_string()]
}

fn default_percent_digits() -> u32 {
    2
}

fn default_max_supply() -> Weight {
    Weight::from_coins(133_248_297)
}

fn default_threshold_bps() -> u32 {
    10
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NetworkConfig {
    /// Minimum voting weight whose votes are worth rebroadcasting.
    ///
    /// `max_supply * rebroadcast_threshold_bps / 10_000` — 0.1% of supply by
    /// default.
    pub fn rebroadcast_threshold(&self) -> Weight {
        self.max_supply.mul_bps(self.rebroadcast_threshold_bps)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, PulseError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PulseError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PulseError> {
        toml::from_str(s).map_err(|e| PulseError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("NetworkConfig is always serializable to TOML")
    }
}

impl Default for CurrencyInfo {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            prefixes: default_prefixes(),
        }
    }
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            amount_digits: 0,
            percent_digits: default_percent_digits(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_supply: default_max_supply(),
            currency: CurrencyInfo::default(),
            rebroadcast_threshold_bps: default_threshold_bps(),
            display: DisplayPolicy::default(),
        }
    }
}
