//! Weight ratios and the derived network-status bundle.

use serde::{Deserialize, Serialize};

use pulse_types::{NetworkConfig, Percent, Weight};

use crate::weights::WeightMap;

/// `weight` as a percentage of the network's maximum supply.
///
/// Returns `None` when `max_supply` is zero — an undefined ratio, not a
/// fault. Callers must check before display.
pub fn percent_of_supply(weight: Weight, config: &NetworkConfig) -> Option<Percent> {
    Percent::from_ratio(weight, config.max_supply)
}

/// `weight` as a percentage of the currently online voting weight.
///
/// Same zero-denominator policy as [`percent_of_supply`].
pub fn percent_of_online(weight: Weight, online_weight: Weight) -> Option<Percent> {
    Percent::from_ratio(weight, online_weight)
}

/// Every derived statistic the network-status view renders, computed in one
/// pass over a pair of weight snapshots.
///
/// Deterministic and idempotent: the same snapshots produce the same bundle
/// on every call, with no iteration-order dependence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Total weight of representatives seen voting this sample.
    pub online_weight: Weight,
    /// Number of representatives seen voting this sample.
    pub online_count: usize,

    /// Weight of online representatives at or above the rebroadcast threshold.
    pub rebroadcast_weight: Weight,
    /// Number of online representatives at or above the rebroadcast threshold.
    pub rebroadcast_count: usize,
    /// The threshold itself, for display alongside the counts.
    pub rebroadcast_threshold: Weight,

    /// Total weight of the curated official representatives.
    pub official_weight: Weight,

    /// Online weight as a share of max supply.
    pub online_percent_of_supply: Option<Percent>,
    /// Official weight as a share of max supply.
    pub official_percent_of_supply: Option<Percent>,
    /// Official weight as a share of online weight.
    pub official_percent_of_online: Option<Percent>,
    /// Rebroadcast-eligible weight as a share of max supply.
    pub rebroadcast_percent_of_supply: Option<Percent>,
    /// Rebroadcast-eligible weight as a share of online weight.
    pub rebroadcast_percent_of_online: Option<Percent>,
}

impl NetworkStats {
    /// Compute the full bundle from one poll's snapshots.
    pub fn compute(online: &WeightMap, official: &WeightMap, config: &NetworkConfig) -> Self {
        let online_weight = online.total();
        let rebroadcastable = online.rebroadcastable(config);
        let rebroadcast_weight = rebroadcastable.total();
        let official_weight = official.total();

        Self {
            online_weight,
            online_count: online.len(),
            rebroadcast_weight,
            rebroadcast_count: rebroadcastable.len(),
            rebroadcast_threshold: config.rebroadcast_threshold(),
            official_weight,
            online_percent_of_supply: percent_of_supply(online_weight, config),
            official_percent_of_supply: percent_of_supply(official_weight, config),
            official_percent_of_online: percent_of_online(official_weight, online_weight),
            rebroadcast_percent_of_supply: percent_of_supply(rebroadcast_weight, config),
            rebroadcast_percent_of_online: percent_of_online(rebroadcast_weight, online_weight),
        }
    }
}
