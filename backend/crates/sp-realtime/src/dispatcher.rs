use crate::{BroadcastReport, Envelope, Hub};

use sp_core::UserId;

use tokio::task::JoinHandle;

/// Fire-and-forget bridge from write paths to the hub.
///
/// Each dispatch runs on its own task; callers never wait on delivery and
/// never see an error. The join handle exists for tests.
#[derive(Clone)]
pub struct EventDispatcher {
    hub: Hub,
}

impl EventDispatcher {
    pub fn new(hub: Hub) -> Self {
        Self { hub }
    }

    /// Must be called from within a tokio runtime
    pub fn dispatch(&self, user_id: UserId, envelope: Envelope) -> JoinHandle<BroadcastReport> {
        let hub = self.hub.clone();
        tokio::spawn(async move { hub.broadcast(user_id, &envelope) })
    }

    pub fn dispatch_all(
        &self,
        deliveries: impl IntoIterator<Item = (UserId, Envelope)>,
    ) -> Vec<JoinHandle<BroadcastReport>> {
        deliveries
            .into_iter()
            .map(|(user_id, envelope)| self.dispatch(user_id, envelope))
            .collect()
    }
}
