//! One poll's worth of API responses, bundled immutably.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pulse_stats::{BlockTally, NetworkStats, PeerVersions, WeightMap};
use pulse_types::{NetworkConfig, Timestamp};

use crate::error::WireError;

/// The four API responses the status view consumes, taken together as one
/// immutable snapshot. Amounts travel as decimal strings; parsing happens
/// once, in the stats layer, where malformed values fail loudly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// When the snapshot was taken (epoch milliseconds), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,

    /// Online representative address → voting weight.
    #[serde(default)]
    pub representatives_online: HashMap<String, String>,

    /// Curated official representative address → voting weight.
    #[serde(default)]
    pub official_representatives: HashMap<String, String>,

    /// Block type → cumulative count.
    #[serde(default)]
    pub block_counts: HashMap<String, String>,

    /// Peer `"ip:port"` → protocol version.
    #[serde(default)]
    pub peers: HashMap<String, String>,
}

impl NetworkSnapshot {
    /// Decode a snapshot from its JSON form. Absent sections decode as empty.
    pub fn from_json(s: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse the online-representative section.
    pub fn online_weights(&self) -> Result<WeightMap, WireError> {
        Ok(WeightMap::from_entries(
            self.representatives_online
                .iter()
                .map(|(account, weight)| (account.clone(), weight)),
        )?)
    }

    /// Parse the official-representative section.
    pub fn official_weights(&self) -> Result<WeightMap, WireError> {
        Ok(WeightMap::from_entries(
            self.official_representatives
                .iter()
                .map(|(account, weight)| (account.clone(), weight)),
        )?)
    }

    /// Parse the block-count section.
    pub fn block_tally(&self) -> Result<BlockTally, WireError> {
        Ok(BlockTally::from_entries(
            self.block_counts
                .iter()
                .map(|(kind, count)| (kind.clone(), count)),
        )?)
    }

    /// Tally the peers section.
    pub fn peer_versions(&self) -> PeerVersions {
        PeerVersions::from_entries(
            self.peers
                .iter()
                .map(|(addr, version)| (addr.as_str(), version.clone())),
        )
    }

    /// Run the full aggregation over this snapshot.
    pub fn stats(&self, config: &NetworkConfig) -> Result<NetworkStats, WireError> {
        let online = self.online_weights()?;
        let official = self.official_weights()?;
        Ok(NetworkStats::compute(&online, &official, config))
    }
}

/// Anything that can deliver one immutable [`NetworkSnapshot`] per
/// invocation.
///
/// The polling shell owns scheduling and transport; the core only ever sees
/// finished snapshots through this seam.
pub trait SnapshotSource {
    fn fetch(&mut self) -> Result<NetworkSnapshot, WireError>;
}

/// Reads snapshots from a JSON file — captured API responses, test fixtures,
/// or a file another process keeps current.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonFileSource {
    fn fetch(&mut self) -> Result<NetworkSnapshot, WireError> {
        let content = std::fs::read_to_string(&self.path)?;
        NetworkSnapshot::from_json(&content)
    }
}
