//! Snapshot model for the explorer API's JSON responses.
//!
//! The aggregation core is pure; this crate is the seam between it and
//! whatever fetches the API: raw response maps, one immutable
//! [`NetworkSnapshot`] per poll, and the [`SnapshotSource`] trait a polling
//! shell implements. The HTTP transport itself lives outside this workspace.

pub mod error;
pub mod snapshot;

pub use error::WireError;
pub use snapshot::{JsonFileSource, NetworkSnapshot, SnapshotSource};
