//! Session metrics tracking.
//!
//! Counters for what happened to the phone book during one interactive
//! session. The tracker is a cheap cloneable handle: clones share the same
//! counters, so the phone book and the controller can each hold one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for phone book activity.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    contacts_added_total: Arc<AtomicU64>,
    contacts_deleted_total: Arc<AtomicU64>,
    filters_applied_total: Arc<AtomicU64>,
    actions_total: Arc<AtomicU64>,
    action_failures_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            filters_applied_total: Arc::new(AtomicU64::new(0)),
            actions_total: Arc::new(AtomicU64::new(0)),
            action_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a contact registration.
    pub fn track_contact_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track removal of `count` contacts.
    pub fn track_contacts_deleted(&self, count: usize) {
        self.contacts_deleted_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Track a filter application.
    pub fn track_filter_applied(&self, duration_us: u128, matched: usize, total: usize) {
        self.filters_applied_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            duration_us = duration_us,
            matched = matched,
            total = total,
            "Filter applied"
        );
    }

    /// Track an executed menu action.
    pub fn track_action(&self, action: &str, success: bool) {
        self.actions_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.action_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::trace!(action = %action, success = success, "Action finished");
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_deleted_total(&self) -> u64 {
        self.contacts_deleted_total.load(Ordering::Relaxed)
    }

    pub fn filters_applied_total(&self) -> u64 {
        self.filters_applied_total.load(Ordering::Relaxed)
    }

    pub fn actions_total(&self) -> u64 {
        self.actions_total.load(Ordering::Relaxed)
    }

    pub fn action_failures_total(&self) -> u64 {
        self.action_failures_total.load(Ordering::Relaxed)
    }

    /// Get the action failure rate (0.0 to 1.0).
    pub fn action_failure_rate(&self) -> f64 {
        let failures = self.action_failures_total() as f64;
        let total = self.actions_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failures / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Session Summary:\n\
             Contacts Added: {}\n\
             Contacts Deleted: {}\n\
             Filters Applied: {}\n\
             Actions: {}\n\
             Failed Actions: {} ({:.2}% failure rate)",
            self.contacts_added_total(),
            self.contacts_deleted_total(),
            self.filters_applied_total(),
            self.actions_total(),
            self.action_failures_total(),
            self.action_failure_rate() * 100.0,
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Elapsed time so far in microseconds, without finishing the timer.
    pub fn elapsed_us(&self) -> u128 {
        self.start.elapsed().as_micros()
    }

    /// Finish the timer with a specific status, returning elapsed microseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_us = self.elapsed_us();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_us = duration_us,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_us = duration_us,
                "Operation failed"
            );
        }

        duration_us
    }
}
