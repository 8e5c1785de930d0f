//! Derived network statistics over explorer API snapshots.
//!
//! Every poll of the network API produces a fresh set of immutable maps —
//! online representative weights, official representative weights, block
//! counts by type, connected peers. This crate turns those snapshots into the
//! numbers a status view renders. All computations are pure, synchronous, and
//! idempotent: same snapshot in, same statistics out.
//!
//! ## Module overview
//!
//! - [`weights`] — Snapshot weight map with strict decimal parsing.
//! - [`network`] — Weight ratios and the [`NetworkStats`] bundle.
//! - [`blocks`] — Block-count-by-type tally.
//! - [`peers`] — Peer protocol-version tally.
//! - [`error`] — Statistics error types.

pub mod blocks;
pub mod error;
pub mod network;
pub mod peers;
pub mod weights;

pub use blocks::BlockTally;
pub use error::StatsError;
pub use network::{percent_of_online, percent_of_supply, NetworkStats};
pub use peers::PeerVersions;
pub use weights::WeightMap;
