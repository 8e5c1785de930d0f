//! Shared utilities for the Pulse explorer core.

pub mod logging;
pub mod time;

pub use logging::{init_tracing, LogFormat};
pub use time::format_age;
