use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, Metrics, RealtimeService, ServerMessage,
    ShutdownCoordinator, WebSocketConnection,
};

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{debug, error, warn};
use sa_config::RuntimeMode;
use sa_core::QueryService;
use tokio::sync::mpsc;

/// Shared application state for REST and WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub query: QueryService,
    pub realtime: Arc<RealtimeService>,
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    pub mode: RuntimeMode,
    pub started_at: Instant,
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if state.shutdown.is_shutdown() {
        warn!("Rejecting WebSocket upgrade during shutdown");
        state.metrics.connection_rejected("shutdown");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let (tx, rx) = mpsc::channel::<Message>(state.config.send_buffer_size);

    // Queue the welcome before joining the broadcast set so it is always first
    let welcome = ServerMessage::connected().to_json().map_err(|e| {
        error!("Failed to encode welcome message: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    tx.try_send(Message::Text(welcome.into())).map_err(|e| {
        error!("Failed to queue welcome message: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    // Register connection (enforces connection limits)
    let connection_id = state.registry.register(tx.clone()).await.map_err(|e| {
        warn!("Failed to register connection: {}", e);
        state.metrics.connection_rejected("limit");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    debug!("WebSocket upgrade accepted for connection {}", connection_id);

    let registry = state.registry.clone();
    Ok(ws
        .on_failed_upgrade(move |e| {
            warn!("WebSocket upgrade failed for {}: {}", connection_id, e);
            tokio::spawn(async move { registry.unregister(connection_id).await });
        })
        .on_upgrade(move |socket| handle_socket(socket, connection_id, tx, rx, state)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    state: AppState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection =
        WebSocketConnection::new(connection_id, state.registry.clone(), state.metrics.clone());

    if let Err(e) = connection.handle(socket, tx, rx, shutdown_guard).await {
        error!("Connection {connection_id} error: {e}");
    }
}
