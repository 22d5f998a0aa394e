//! Process-lifetime artifact tally
//!
//! Reporting only; the count never influences behavior.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts artifacts produced over the life of the process. Incremented by the
/// orchestrator's caller with the number of confirmed successful results, so
/// concurrent submissions tally correctly.
#[derive(Debug, Default)]
pub struct RequestCounter(AtomicU64);

impl RequestCounter {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Adds the number of artifacts produced by one request.
    pub fn record(&self, produced: u64) {
        self.0.fetch_add(produced, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
