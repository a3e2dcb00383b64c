use crate::{ConnectionId, ConnectionInfo, ConnectionLimits, Result as WsErrorResult, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::{Message, Utf8Bytes};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc};

/// Result of offering one message to every registered connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Connections the message was enqueued for
    pub delivered: usize,
    /// Open connections whose queue was full; they miss this message only
    pub dropped: usize,
}

/// Registry for tracking active WebSocket connections
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
            limits,
        }
    }

    /// Register a new connection, returns ConnectionId if successful
    pub async fn register(&self, sender: mpsc::Sender<Message>) -> WsErrorResult<ConnectionId> {
        let mut inner = self.inner.write().await;

        // Check total connection limit
        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        let info = ConnectionInfo {
            connection_id,
            connected_at: chrono::Utc::now(),
            sender,
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok(connection_id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;

        if inner.connections.remove(&connection_id).is_some() {
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                inner.connections.len()
            );
        }
    }

    /// Offer `payload` to every open connection without waiting on any of them.
    ///
    /// The read lock is held for the whole fan-out, so a connection removed by
    /// `unregister` is either fully before or fully after this call.
    pub async fn broadcast(&self, payload: Utf8Bytes) -> BroadcastOutcome {
        let inner = self.inner.read().await;
        let mut outcome = BroadcastOutcome::default();

        for info in inner.connections.values() {
            if !info.is_open() {
                continue;
            }

            match info.sender.try_send(Message::Text(payload.clone())) {
                Ok(()) => outcome.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        "Send buffer full for connection {}, dropping broadcast",
                        info.connection_id
                    );
                    outcome.dropped += 1;
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(
                        "Connection {} closed during broadcast",
                        info.connection_id
                    );
                }
            }
        }

        outcome
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }

    pub fn max_total(&self) -> usize {
        self.limits.max_total
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
