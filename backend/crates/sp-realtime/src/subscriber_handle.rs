use crate::{Envelope, HandleId, Hub};

use sp_core::UserId;

use tokio::sync::mpsc::{self, error::TryRecvError};

/// One live stream's end of the hub: a bounded queue owned by one user.
///
/// Dropping the handle unregisters it, so teardown runs on every exit path.
pub struct SubscriberHandle {
    id: HandleId,
    user_id: UserId,
    receiver: mpsc::Receiver<Envelope>,
    hub: Hub,
}

impl SubscriberHandle {
    pub(crate) fn new(
        id: HandleId,
        user_id: UserId,
        receiver: mpsc::Receiver<Envelope>,
        hub: Hub,
    ) -> Self {
        Self {
            id,
            user_id,
            receiver,
            hub,
        }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Next queued envelope, or `None` once the queue is closed and drained
    pub async fn recv(&mut self) -> Option<Envelope> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Result<Envelope, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Remove this handle from the hub now. Dropping afterwards is a no-op.
    pub fn unregister(&self) -> bool {
        self.hub.unregister(self.user_id, self.id)
    }
}

impl Drop for SubscriberHandle {
    fn drop(&mut self) {
        self.hub.unregister(self.user_id, self.id);
    }
}

impl std::fmt::Debug for SubscriberHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberHandle")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
