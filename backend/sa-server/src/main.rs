use sa_config::Config;
use sa_core::QueryService;
use sa_rpc::SolanaRpcClient;
use sa_server::{RateLimitLayers, build_router_with_limits, logger};
use sa_ws::{
    AppState, BroadcastConfig, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    RealtimeService, ShutdownCoordinator,
};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{error, info};
use tokio::net::TcpListener;

/// How often idle per-IP rate limit state is pruned
const RATE_LIMIT_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let started_at = Instant::now();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting sa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // RPC gateway and query layer
    let rpc = SolanaRpcClient::new(
        &config.rpc.url,
        Duration::from_secs(config.rpc.timeout_secs),
    )?;
    info!("RPC client ready: {}", rpc.url);
    let query = QueryService::new(Arc::new(rpc));

    // Realtime fan-out
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });
    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();

    let realtime = Arc::new(RealtimeService::new(
        query.clone(),
        registry.clone(),
        metrics.clone(),
        shutdown.clone(),
        BroadcastConfig::from_config(&config.websocket),
    ));
    realtime.start();

    let app_state = AppState {
        query,
        realtime: realtime.clone(),
        registry,
        metrics,
        shutdown: shutdown.clone(),
        config: ConnectionConfig::from_config(&config.websocket),
        mode: config.server.mode,
        started_at,
    };

    // Build router
    let limits = RateLimitLayers::from_config(&config.rate_limit)?;
    let app = build_router_with_limits(app_state, &config, limits.clone())?;

    let limits_for_prune = limits;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            limits_for_prune.retain_recent();
        }
    });

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let realtime_for_signal = realtime.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        realtime_for_signal.stop();
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown.subscribe_guard().wait().await;
        info!("Graceful shutdown complete");
    })
    .await?;

    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on unix
async fn wait_for_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
