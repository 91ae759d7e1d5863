use crate::{BroadcastReport, EventKind};

use metrics::{counter, gauge};

/// Metrics collector for event streams and the hub
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "sp_realtime",
        }
    }

    /// Record new stream opened
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record stream closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record stream refused before it started
    pub fn connection_rejected(&self, reason: &str) {
        counter!(format!("{}.connections.rejected.{}", self.prefix, reason)).increment(1);
    }

    /// Record event written to a stream
    pub fn event_sent(&self, kind: EventKind) {
        counter!(format!("{}.events.sent", self.prefix)).increment(1);
        counter!(format!("{}.events.sent.{}", self.prefix, kind.as_str())).increment(1);
    }

    /// Record event skipped by a conversation filter
    pub fn event_filtered(&self) {
        counter!(format!("{}.events.filtered", self.prefix)).increment(1);
    }

    pub fn keepalive_sent(&self) {
        counter!(format!("{}.keepalives.sent", self.prefix)).increment(1);
    }

    /// Record one broadcast and what happened to its copies
    pub fn broadcast_published(&self, kind: EventKind, report: &BroadcastReport) {
        counter!(format!("{}.broadcast.published.{}", self.prefix, kind.as_str())).increment(1);
        counter!(format!("{}.events.delivered", self.prefix)).increment(report.delivered as u64);
        if report.dropped > 0 {
            counter!(format!("{}.events.dropped", self.prefix)).increment(report.dropped as u64);
        }
    }

    pub fn handles_changed(&self, total: usize) {
        gauge!(format!("{}.hub.handles", self.prefix)).set(total as f64);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
