mod client;

pub use client::*;

/// Default per-call deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
