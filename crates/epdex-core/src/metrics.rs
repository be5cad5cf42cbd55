//! Lock-free counters for controller telemetry.
//!
//! One [`ControllerMetrics`] per controller, shared with the host behind an
//! `Arc`. Counters are monotone; [`ControllerMetrics::snapshot`] gives a
//! plain struct for assertions and dashboards.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotone counters covering the fetch and debounce lifecycles.
#[derive(Debug, Default)]
pub struct ControllerMetrics {
    /// Fetches initiated (epochs issued).
    pub fetches_started: AtomicU64,
    /// Responses applied to state.
    pub responses_applied: AtomicU64,
    /// Responses discarded because a newer epoch was already issued.
    pub responses_discarded_stale: AtomicU64,
    /// Fetches that resolved to a failure.
    pub fetch_failures: AtomicU64,
    /// Triggers answered locally by the known-empty policy.
    pub short_circuits: AtomicU64,
    /// Debounce timers scheduled.
    pub debounce_scheduled: AtomicU64,
    /// Debounce elapses ignored as superseded.
    pub debounce_stale: AtomicU64,
    /// Page jumps rejected as out of range.
    pub page_jumps_rejected: AtomicU64,
}

/// Point-in-time copy of [`ControllerMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub fetches_started: u64,
    pub responses_applied: u64,
    pub responses_discarded_stale: u64,
    pub fetch_failures: u64,
    pub short_circuits: u64,
    pub debounce_scheduled: u64,
    pub debounce_stale: u64,
    pub page_jumps_rejected: u64,
}

impl ControllerMetrics {
    /// Increment a counter by one.
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy all counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            fetches_started: self.fetches_started.load(Ordering::Relaxed),
            responses_applied: self.responses_applied.load(Ordering::Relaxed),
            responses_discarded_stale: self.responses_discarded_stale.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            short_circuits: self.short_circuits.load(Ordering::Relaxed),
            debounce_scheduled: self.debounce_scheduled.load(Ordering::Relaxed),
            debounce_stale: self.debounce_stale.load(Ordering::Relaxed),
            page_jumps_rejected: self.page_jumps_rejected.load(Ordering::Relaxed),
        }
    }
}
