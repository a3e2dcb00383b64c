use crate::ConnectionId;

use axum::extract::ws::Message;
use chrono::DateTime;
use tokio::sync::mpsc;

/// Information about a registered connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<chrono::Utc>,
    /// Outbound queue drained by the connection's writer task
    pub sender: mpsc::Sender<Message>,
}

impl ConnectionInfo {
    /// A connection is open until its writer task has gone away
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}
