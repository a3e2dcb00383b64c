use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// Helper for gracefully handling shutdown in async tasks
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    already_triggered: bool,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        // Subscribe before reading the flag so a concurrent trigger is seen
        // by one or the other.
        let shutdown_rx = coordinator.subscribe();
        Self {
            shutdown_rx,
            already_triggered: coordinator.is_shutdown(),
        }
    }

    /// Wait for shutdown signal
    pub async fn wait(&mut self) {
        if self.already_triggered {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }
}
