pub mod app_state;
pub mod broadcast_config;
pub mod client_message;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod realtime_service;
pub mod server_message;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;

pub use app_state::{AppState, handler};
pub use broadcast_config::BroadcastConfig;
pub use client_message::ClientMessage;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::{BroadcastOutcome, ConnectionRegistry};
pub use dispatcher::{dispatch, dispatch_text};
pub use error::{Result, WsError};
pub use metrics::Metrics;
pub use realtime_service::RealtimeService;
pub use server_message::{BLOCKS_CHANNEL, ServerMessage, WELCOME_MESSAGE};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::WebSocketConnection;


/// Current time as Unix milliseconds, the timestamp unit of every envelope
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
