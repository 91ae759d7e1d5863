use crate::ShutdownGuard;

use std::sync::Arc;

use tokio::sync::watch;

/// Server-wide stop flag.
///
/// The flag is latched: a guard taken after [`ShutdownCoordinator::shutdown`]
/// resolves immediately, so streams accepted during shutdown still end.
#[derive(Debug, Clone)]
pub struct ShutdownCoordinator {
    stopping: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stopping, _) = watch::channel(false);
        Self {
            stopping: Arc::new(stopping),
        }
    }

    /// Flip the flag; every current and future guard observes it
    pub fn shutdown(&self) {
        let already = self.stopping.send_replace(true);
        if !already {
            log::info!(
                "Shutdown requested, closing {} open streams",
                self.stopping.receiver_count()
            );
        }
    }

    pub fn is_shutdown(&self) -> bool {
        *self.stopping.borrow()
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self.stopping.subscribe())
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
