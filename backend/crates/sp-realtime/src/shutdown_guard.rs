use tokio::sync::watch;

/// One task's view of the shutdown flag
#[derive(Debug)]
pub struct ShutdownGuard {
    stopping: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub(crate) fn new(stopping: watch::Receiver<bool>) -> Self {
        Self { stopping }
    }

    /// Resolves once shutdown has been requested, including before this
    /// guard existed. Also resolves if the coordinator is gone.
    pub async fn wait(&mut self) {
        let _ = self.stopping.wait_for(|stopping| *stopping).await;
    }
}
