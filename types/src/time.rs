//! Timestamps served by the explorer API (Unix epoch milliseconds).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in milliseconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_millis() as u64;
        Self(millis)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Calendar form in UTC, e.g. `"Mar 5, 2026 14:30:05"`.
    ///
    /// Returns `None` for the zero timestamp (the API serves `0` for
    /// "unknown") and for values beyond chrono's representable range.
    pub fn format_calendar(&self) -> Option<String> {
        if self.0 == 0 || self.0 > i64::MAX as u64 {
            return None;
        }
        let datetime = DateTime::<Utc>::from_timestamp_millis(self.0 as i64)?;
        Some(datetime.format("%b %-d, %Y %H:%M:%S").to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
