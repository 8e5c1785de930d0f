//! Peer protocol-version tally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How many connected peers speak each protocol version.
///
/// Built from the API's peers map (`"ip:port" → protocol version`). Versions
/// are opaque strings — the tally never interprets them beyond equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerVersions {
    by_version: HashMap<String, usize>,
    total: usize,
}

impl PeerVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a raw peers map. Never fails: every peer has *some* version
    /// string, and the address keys are only counted, not parsed.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut by_version: HashMap<String, usize> = HashMap::new();
        let mut total = 0;
        for (_addr, version) in entries {
            *by_version.entry(version.into()).or_insert(0) += 1;
            total += 1;
        }
        Self { by_version, total }
    }

    /// Total connected peers.
    pub fn total_peers(&self) -> usize {
        self.total
    }

    /// Peers speaking one version.
    pub fn count(&self, version: &str) -> usize {
        self.by_version.get(version).copied().unwrap_or(0)
    }

    /// Number of distinct versions seen.
    pub fn distinct_versions(&self) -> usize {
        self.by_version.len()
    }

    /// `(version, count)` pairs, most common first. Ties order by version
    /// string descending so the ordering is deterministic.
    pub fn sorted(&self) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> = self
            .by_version
            .iter()
            .map(|(version, &count)| (version.clone(), count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        pairs
    }
}
