#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;
use serde_json::Value;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect and consume the welcome envelope
    pub async fn connect(server: &TestServer) -> Self {
        let mut client = Self::connect_raw(server).await;
        let welcome = client.receive_json().await;
        assert_eq!(welcome["type"], "connected");
        client
    }

    /// Connect without reading anything
    pub async fn connect_raw(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;

        Self { ws }
    }

    /// Send text message
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Send binary message
    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        self.ws.send_message(WsMessage::Binary(data.into())).await;
    }

    /// Receive next text frame decoded as JSON
    pub async fn receive_json(&mut self) -> Value {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("server sent invalid JSON")
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect `count` clients, each past its welcome envelope
pub async fn connect_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
