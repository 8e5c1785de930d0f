//! Fundamental types for the Pulse explorer core.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account addresses, block hashes, fixed-point weights and percentages,
//! timestamps, and the explorer's network configuration.

pub mod address;
pub mod config;
pub mod error;
pub mod hash;
pub mod percent;
pub mod time;
pub mod weight;

pub use address::{is_valid_address, Account};
pub use config::{CurrencyInfo, DisplayPolicy, NetworkConfig};
pub use error::PulseError;
pub use hash::{is_valid_block_hash, BlockHash};
pub use percent::Percent;
pub use time::Timestamp;
pub use weight::Weight;
