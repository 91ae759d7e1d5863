use crate::{ConnectionConfig, Metrics, ShutdownGuard, StreamFilter, StreamFrame, SubscriberHandle};

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Why a stream loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Peer went away or a write failed
    ClientDisconnected,
    /// The handle was unregistered from the hub
    QueueClosed,
    /// Server is shutting down
    Shutdown,
}

impl LoopExit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientDisconnected => "client_disconnected",
            Self::QueueClosed => "queue_closed",
            Self::Shutdown => "shutdown",
        }
    }
}

/// Relays one subscriber handle's events to a streaming response
pub struct StreamConnection {
    handle: SubscriberHandle,
    filter: StreamFilter,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl StreamConnection {
    pub fn new(
        handle: SubscriberHandle,
        filter: StreamFilter,
        config: ConnectionConfig,
        metrics: Metrics,
    ) -> Self {
        Self {
            handle,
            filter,
            config,
            metrics,
        }
    }

    /// Run until the client disconnects, the queue closes, or shutdown.
    ///
    /// Frames go to `transport`; the receiving end feeds the response body,
    /// so the transport closing means the client is gone. The handle is
    /// dropped (and therefore unregistered) before this returns.
    pub async fn run(
        self,
        transport: mpsc::Sender<StreamFrame>,
        mut shutdown_guard: ShutdownGuard,
    ) -> LoopExit {
        let Self {
            mut handle,
            filter,
            config,
            metrics,
        } = self;

        let handle_id = handle.id();
        let user_id = handle.user_id();

        info!("Stream {handle_id} opened for user {user_id} ({filter})");
        metrics.connection_established();

        let period = config.keepalive_interval();
        let mut keepalive = interval_at(Instant::now() + period, period);
        keepalive.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let exit = if transport.send(StreamFrame::connected(user_id)).await.is_err() {
            LoopExit::ClientDisconnected
        } else {
            loop {
                tokio::select! {
                    // Peer closed the response body
                    _ = transport.closed() => {
                        break LoopExit::ClientDisconnected;
                    }

                    envelope = handle.recv() => {
                        let Some(envelope) = envelope else {
                            break LoopExit::QueueClosed;
                        };

                        if !filter.accepts(&envelope) {
                            metrics.event_filtered();
                            continue;
                        }

                        let frame = match StreamFrame::from_envelope(&envelope) {
                            Ok(frame) => frame,
                            Err(e) => {
                                warn!("Skipping event on stream {handle_id}: {e}");
                                metrics.error_occurred("serialization");
                                continue;
                            }
                        };

                        if transport.send(frame).await.is_err() {
                            break LoopExit::ClientDisconnected;
                        }

                        metrics.event_sent(envelope.kind());
                        keepalive.reset();
                    }

                    _ = keepalive.tick() => {
                        debug!("Keepalive on stream {handle_id}");
                        if transport.send(StreamFrame::ping()).await.is_err() {
                            break LoopExit::ClientDisconnected;
                        }
                        metrics.keepalive_sent();
                    }

                    _ = shutdown_guard.wait() => {
                        break LoopExit::Shutdown;
                    }
                }
            }
        };

        drop(handle);
        metrics.connection_closed(exit.as_str());
        info!("Stream {handle_id} closed for user {user_id}: {}", exit.as_str());

        exit
    }
}
