//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcast coordinator for graceful shutdown.
///
/// The server and any background task subscribe; the signal watcher (or a
/// test) triggers.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. Subscribers created afterwards will not see it.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Resolve once `trigger` has been called.
    pub async fn wait(mut rx: broadcast::Receiver<()>) {
        // A lagged or closed channel also means we are going down.
        let _ = rx.recv().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
