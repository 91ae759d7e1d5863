use crate::{
    BroadcastReport, Envelope, HandleId, HubConfig, Metrics, RealtimeError,
    Result as RealtimeErrorResult, SubscriberHandle,
};

use sp_core::UserId;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Per-user registry of live subscriber handles.
///
/// Every handle owns a bounded queue; the hub keeps only the sending half.
/// Registration and removal never suspend, and broadcasting never waits on a
/// consumer: a full queue loses that copy of the event.
#[derive(Clone)]
pub struct Hub {
    inner: Arc<RwLock<HubInner>>,
    config: HubConfig,
    metrics: Metrics,
}

#[derive(Default)]
struct HubInner {
    /// A user key is present only while it has at least one handle
    users: HashMap<UserId, HashMap<HandleId, mpsc::Sender<Envelope>>>,
    total_handles: usize,
}

impl HubInner {
    fn insert(&mut self, user_id: UserId, capacity: usize) -> (HandleId, mpsc::Receiver<Envelope>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let handle_id = HandleId::new();

        self.users.entry(user_id).or_default().insert(handle_id, tx);
        self.total_handles += 1;

        (handle_id, rx)
    }
}

impl Hub {
    pub fn new(config: HubConfig, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HubInner::default())),
            config,
            metrics,
        }
    }

    /// Create a handle with a fresh bounded queue for `user_id`
    pub fn register(&self, user_id: UserId) -> SubscriberHandle {
        self.attach(self.write(), user_id)
    }

    /// Like [`Hub::register`], but refuses once `max_total` handles are live.
    /// The check and the insert happen under one lock.
    #[track_caller]
    pub fn try_register(
        &self,
        user_id: UserId,
        max_total: usize,
    ) -> RealtimeErrorResult<SubscriberHandle> {
        let inner = self.write();

        if inner.total_handles >= max_total {
            let current = inner.total_handles;
            drop(inner);

            warn!("Stream limit reached: {current}/{max_total}");
            return Err(RealtimeError::StreamLimitExceeded {
                current,
                max: max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(self.attach(inner, user_id))
    }

    /// Insert under the caller's write lock, release it, then log and hand out
    /// the handle
    fn attach(
        &self,
        mut inner: RwLockWriteGuard<'_, HubInner>,
        user_id: UserId,
    ) -> SubscriberHandle {
        let (handle_id, receiver) = inner.insert(user_id, self.config.queue_capacity);
        let total = inner.total_handles;
        drop(inner);

        debug!("Registered handle {handle_id} for user {user_id} ({total} total)");
        self.metrics.handles_changed(total);

        SubscriberHandle::new(handle_id, user_id, receiver, self.clone())
    }

    /// Remove a handle. Returns `false` if it was already gone.
    ///
    /// Dropping the stored sender closes the handle's queue: the receiver
    /// drains whatever is already queued and then observes closure.
    pub fn unregister(&self, user_id: UserId, handle_id: HandleId) -> bool {
        let mut inner = self.write();

        let Some(handles) = inner.users.get_mut(&user_id) else {
            return false;
        };

        if handles.remove(&handle_id).is_none() {
            return false;
        }

        if handles.is_empty() {
            inner.users.remove(&user_id);
        }
        inner.total_handles -= 1;
        let total = inner.total_handles;
        drop(inner);

        debug!("Unregistered handle {handle_id} for user {user_id} ({total} remaining)");
        self.metrics.handles_changed(total);

        true
    }

    /// Offer one copy of `envelope` to every handle of `user_id`.
    ///
    /// Holds only the read lock and never waits: a full queue drops the copy,
    /// a closed queue is skipped. A user with no handles is a no-op.
    pub fn broadcast(&self, user_id: UserId, envelope: &Envelope) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        {
            let inner = self.read();
            let Some(handles) = inner.users.get(&user_id) else {
                return report;
            };

            for (handle_id, sender) in handles {
                match sender.try_send(envelope.clone()) {
                    Ok(()) => report.delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        debug!(
                            "Queue full for handle {handle_id} (user {user_id}), dropping {}",
                            envelope.kind()
                        );
                        report.dropped += 1;
                    }
                    Err(TrySendError::Closed(_)) => report.closed += 1,
                }
            }
        }

        self.metrics.broadcast_published(envelope.kind(), &report);

        report
    }

    /// Number of live handles for one user
    pub fn handle_count(&self, user_id: UserId) -> usize {
        self.read().users.get(&user_id).map_or(0, HashMap::len)
    }

    /// Number of users with at least one live handle
    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    /// Number of live handles across all users
    pub fn total_handles(&self) -> usize {
        self.read().total_handles
    }

    pub fn is_registered(&self, user_id: UserId, handle_id: HandleId) -> bool {
        self.read()
            .users
            .get(&user_id)
            .is_some_and(|handles| handles.contains_key(&handle_id))
    }

    /// Drop every handle, closing all queues
    pub fn clear(&self) {
        let mut inner = self.write();
        let users = inner.users.len();
        let handles = inner.total_handles;
        inner.users.clear();
        inner.total_handles = 0;
        drop(inner);

        info!("Closed {handles} handles across {users} users");
        self.metrics.handles_changed(0);
    }

    // The map stays consistent even if a holder panicked, so a poisoned lock
    // is recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, HubInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HubInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(HubConfig::default(), Metrics::default())
    }
}
