/// What happened to one broadcast, per handle.
///
/// Informational only: producers go through the dispatcher and never see it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Copies enqueued
    pub delivered: usize,
    /// Copies discarded because the handle's queue was full
    pub dropped: usize,
    /// Handles whose queue closed between lookup and enqueue
    pub closed: usize,
}

impl BroadcastReport {
    pub fn handle_count(&self) -> usize {
        self.delivered + self.dropped + self.closed
    }
}
