//! Block-count-by-type tally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Ledger block counts keyed by block type (`"send"`, `"receive"`, `"open"`,
/// `"change"`, `"state"`, …). Keys are whatever the API serves — new block
/// types must not break the tally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTally {
    counts: HashMap<String, u64>,
}

impl BlockTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from raw API entries (`type → count-as-string`).
    ///
    /// A non-numeric count fails the whole tally with
    /// [`StatsError::MalformedCount`] naming the offending type.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut counts = HashMap::new();
        for (kind, value) in entries {
            let kind = kind.into();
            let value = value.as_ref();
            let count: u64 = value.parse().map_err(|_| StatsError::MalformedCount {
                kind: kind.clone(),
                value: value.to_string(),
            })?;
            counts.insert(kind, count);
        }
        Ok(Self { counts })
    }

    /// Total blocks across all types.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Count for one block type. Returns 0 for unknown types.
    pub fn count(&self, kind: &str) -> u64 {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    /// Number of distinct block types present.
    pub fn kinds(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(kind, &count)| (kind.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally_totals_zero() {
        assert_eq!(BlockTally::new().total(), 0);
        assert!(BlockTally::new().is_empty());
    }

    #[test]
    fn total_sums_all_kinds() {
        let tally = BlockTally::from_entries([
            ("send", "1000"),
            ("receive", "900"),
            ("open", "50"),
            ("change", "7"),
        ])
        .unwrap();
        assert_eq!(tally.total(), 1957);
        assert_eq!(tally.kinds(), 4);
    }

    #[test]
    fn count_per_kind() {
        let tally = BlockTally::from_entries([("send", "1000")]).unwrap();
        assert_eq!(tally.count("send"), 1000);
        assert_eq!(tally.count("state"), 0);
    }

    #[test]
    fn unknown_kinds_are_carried() {
        let tally = BlockTally::from_entries([("epoch_v3", "12")]).unwrap();
        assert_eq!(tally.count("epoch_v3"), 12);
    }

    #[test]
    fn malformed_count_names_the_kind() {
        let result = BlockTally::from_entries([("send", "1000"), ("open", "many")]);
        match result {
            Err(StatsError::MalformedCount { kind, value }) => {
                assert_eq!(kind, "open");
                assert_eq!(value, "many");
            }
            other => panic!("expected MalformedCount, got {other:?}"),
        }
    }

    #[test]
    fn negative_and_fractional_counts_are_malformed() {
        assert!(BlockTally::from_entries([("send", "-1")]).is_err());
        assert!(BlockTally::from_entries([("send", "1.5")]).is_err());
    }

    #[test]
    fn total_saturates_instead_of_wrapping() {
        let max = u64::MAX.to_string();
        let tally = BlockTally::from_entries([("a", max.as_str()), ("b", "1")]).unwrap();
        assert_eq!(tally.total(), u64::MAX);
    }
}
