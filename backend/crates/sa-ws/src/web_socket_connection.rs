use crate::{
    ConnectionId, ConnectionRegistry, Metrics, Result as WsErrorResult, ServerMessage,
    ShutdownGuard, WsError, dispatch_text,
};

use std::panic::Location;

use axum::extract::ws::{CloseFrame, Message, Utf8Bytes, WebSocket, close_code};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

const SHUTDOWN_CLOSE_REASON: &str = "Server shutting down";

/// Manages a single WebSocket connection after the upgrade.
///
/// The connection is already registered and its outbound queue already holds
/// the `connected` envelope, so nothing can be sent ahead of it.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    registry: ConnectionRegistry,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(connection_id: ConnectionId, registry: ConnectionRegistry, metrics: Metrics) -> Self {
        Self {
            connection_id,
            registry,
            metrics,
        }
    }

    /// Handle the WebSocket connection lifecycle
    pub async fn handle(
        self,
        socket: WebSocket,
        tx: mpsc::Sender<Message>,
        mut rx: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Writer task drains the bounded queue into the socket
        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                let closing = matches!(msg, Message::Close(_));
                if ws_sender.send(msg).await.is_err() || closing {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => match self.handle_client_message(msg, &tx).await {
                            Ok(false) => {}
                            Ok(true) => {
                                log::info!("Connection {} sent close frame", self.connection_id);
                                break Ok(());
                            }
                            Err(e) => {
                                log::error!(
                                    "Error handling message from connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                self.metrics.error_occurred("message_handling");
                                break Err(e);
                            }
                        },
                        Some(Err(e)) => {
                            log::warn!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    let _ = tx.try_send(Message::Close(Some(CloseFrame {
                        code: close_code::AWAY,
                        reason: Utf8Bytes::from_static(SHUTDOWN_CLOSE_REASON),
                    })));
                    break Ok(());
                }
            }
        };

        // Leave the broadcast set first, then close the queue
        self.registry.unregister(self.connection_id).await;
        drop(tx);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    /// Handle one frame from the client. Returns `true` when the client asked
    /// to close.
    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<bool> {
        let reply = match msg {
            Message::Text(text) => {
                self.metrics.message_received("text");
                dispatch_text(text.as_str())
            }
            Message::Binary(data) => match std::str::from_utf8(&data) {
                Ok(text) => {
                    self.metrics.message_received("binary");
                    dispatch_text(text)
                }
                Err(_) => {
                    self.metrics.error_occurred("invalid_utf8");
                    log::debug!(
                        "Non UTF-8 binary frame ({} bytes) from connection {}",
                        data.len(),
                        self.connection_id
                    );
                    ServerMessage::invalid_format()
                }
            },
            // Protocol-level pings are answered by the transport
            Message::Ping(_) | Message::Pong(_) => return Ok(false),
            Message::Close(_) => return Ok(true),
        };

        self.send(reply, tx).await?;

        Ok(false)
    }

    async fn send(&self, reply: ServerMessage, tx: &mpsc::Sender<Message>) -> WsErrorResult<()> {
        let kind = reply.kind();
        let json = reply.to_json()?;

        tx.send(Message::Text(json.into()))
            .await
            .map_err(|_| WsError::ConnectionClosed {
                reason: "outbound queue closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.metrics.message_sent(kind);
        Ok(())
    }
}
