//! Snapshot map of representative voting weights.
//!
//! The API serves each poll as a fresh `address → decimal-string` map. A
//! [`WeightMap`] is that snapshot parsed once, with the total cached so the
//! derived statistics never re-walk the map. Snapshots are never mutated —
//! the next poll builds a new one.

use std::collections::HashMap;

use pulse_types::{NetworkConfig, Weight};

use crate::error::StatsError;

/// An immutable snapshot of `representative address → voting weight`.
///
/// Used for both the online-representative map and the curated
/// official-representative map — they share a shape and differ only in
/// source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightMap {
    weights: HashMap<String, Weight>,
    /// Total weight across all entries, computed once at construction.
    total: Weight,
}

impl WeightMap {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from raw API entries, parsing each decimal string
    /// exactly.
    ///
    /// A non-numeric weight fails the whole construction with
    /// [`StatsError::MalformedWeight`] naming the offending account.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut weights = HashMap::new();
        for (account, value) in entries {
            let account = account.into();
            let value = value.as_ref();
            let weight: Weight = value.parse().map_err(|_| StatsError::MalformedWeight {
                account: account.clone(),
                value: value.to_string(),
            })?;
            weights.insert(account, weight);
        }
        let total = weights.values().copied().sum();
        Ok(Self { weights, total })
    }

    /// Total weight across all entries. Empty snapshot → 0.
    pub fn total(&self) -> Weight {
        self.total
    }

    /// Number of representatives in the snapshot.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// A representative's weight. Returns 0 if not present.
    pub fn weight(&self, account: &str) -> Weight {
        self.weights.get(account).copied().unwrap_or(Weight::ZERO)
    }

    pub fn contains(&self, account: &str) -> bool {
        self.weights.contains_key(account)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.weights.iter().map(|(account, &weight)| (account.as_str(), weight))
    }

    /// The subset of entries whose weight meets the rebroadcast threshold
    /// (`≥`, not `>`). Returns a fresh snapshot; `self` is unmodified.
    pub fn rebroadcastable(&self, config: &NetworkConfig) -> WeightMap {
        let threshold = config.rebroadcast_threshold();
        let mut weights = HashMap::new();
        let mut total = Weight::ZERO;
        for (account, &weight) in &self.weights {
            if weight >= threshold {
                total = total.saturating_add(weight);
                weights.insert(account.clone(), weight);
            }
        }
        WeightMap { weights, total }
    }
}
