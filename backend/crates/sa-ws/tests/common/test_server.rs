#![allow(dead_code)]

use crate::common::FakeGateway;

use sa_config::RuntimeMode;
use sa_core::QueryService;
use sa_ws::{
    AppState, BroadcastConfig, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    RealtimeService, ShutdownCoordinator,
};

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub send_buffer_size: usize,
    /// Long enough that the ticker never fires unless a test asks for it
    pub broadcast_interval: Duration,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            send_buffer_size: 16,
            broadcast_interval: Duration::from_secs(3600),
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 3,
            ..Default::default()
        }
    }

    /// Create config with a fast ticker (for scheduled broadcast tests)
    pub fn with_fast_broadcast() -> Self {
        Self {
            broadcast_interval: Duration::from_millis(50),
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
    pub gateway: Arc<FakeGateway>,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let gateway = Arc::new(FakeGateway::new(1000));
    let (app, app_state) = create_app(config, gateway.clone());
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState {
        server,
        app_state,
        gateway,
    }
}

/// Build the Axum Router with AppState
fn create_app(config: TestServerConfig, gateway: Arc<FakeGateway>) -> (Router, AppState) {
    let query = QueryService::new(gateway);

    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.max_connections_total,
    });
    let metrics = Metrics::default();
    let shutdown = ShutdownCoordinator::new();

    let realtime = Arc::new(RealtimeService::new(
        query.clone(),
        registry.clone(),
        metrics.clone(),
        shutdown.clone(),
        BroadcastConfig {
            interval: config.broadcast_interval,
        },
    ));

    let app_state = AppState {
        query,
        realtime,
        registry,
        metrics,
        shutdown,
        config: ConnectionConfig {
            send_buffer_size: config.send_buffer_size,
        },
        mode: RuntimeMode::Development,
        started_at: Instant::now(),
    };

    let router = Router::new()
        .route("/ws", get(sa_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}

/// Poll until the registry reaches `expected` connections or give up
pub async fn wait_for_connection_count(state: &AppState, expected: usize) -> bool {
    for _ in 0..50 {
        if state.registry.total_count().await == expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}
