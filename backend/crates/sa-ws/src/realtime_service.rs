use crate::{
    BroadcastConfig, BroadcastOutcome, ConnectionRegistry, Metrics, Result as WsErrorResult,
    ServerMessage, ShutdownCoordinator,
};

use std::sync::Mutex;

use axum::extract::ws::Utf8Bytes;
use log::{debug, error, info, warn};
use sa_core::QueryService;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Periodically pushes the newest block to every open connection.
///
/// Owns the ticker task. `stop` cancels the ticker before asking connections
/// to close, and dropping the service cancels the ticker too.
pub struct RealtimeService {
    query: QueryService,
    registry: ConnectionRegistry,
    metrics: Metrics,
    shutdown: ShutdownCoordinator,
    config: BroadcastConfig,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl RealtimeService {
    pub fn new(
        query: QueryService,
        registry: ConnectionRegistry,
        metrics: Metrics,
        shutdown: ShutdownCoordinator,
        config: BroadcastConfig,
    ) -> Self {
        Self {
            query,
            registry,
            metrics,
            shutdown,
            config,
            ticker: Mutex::new(None),
        }
    }

    /// Spawn the ticker. Calling it again while running, or after `stop`, is
    /// a no-op.
    pub fn start(&self) {
        if self.shutdown.is_shutdown() {
            warn!("Realtime service already stopped, not starting ticker");
            return;
        }

        let Ok(mut ticker) = self.ticker.lock() else {
            error!("Ticker lock poisoned, not starting ticker");
            return;
        };
        if ticker.is_some() {
            return;
        }

        let period = self.config.interval;
        let query = self.query.clone();
        let registry = self.registry.clone();
        let metrics = self.metrics.clone();

        info!("Starting block broadcast every {:?}", period);

        *ticker = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                // Awaited inline so ticks never overlap
                let _ = broadcast_latest_block(&query, &registry, &metrics).await;
            }
        }));
    }

    /// Run one broadcast tick right now
    pub async fn tick(&self) -> WsErrorResult<BroadcastOutcome> {
        broadcast_latest_block(&self.query, &self.registry, &self.metrics).await
    }

    /// Cancel the ticker, then tell every connection to close. Idempotent.
    pub fn stop(&self) {
        if let Ok(mut ticker) = self.ticker.lock()
            && let Some(handle) = ticker.take()
        {
            handle.abort();
            info!("Block broadcast ticker stopped");
        }

        self.shutdown.shutdown();
    }

    pub fn is_running(&self) -> bool {
        self.ticker
            .lock()
            .map(|ticker| ticker.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    pub fn is_stopped(&self) -> bool {
        self.shutdown.is_shutdown()
    }
}

impl Drop for RealtimeService {
    fn drop(&mut self) {
        if let Ok(ticker) = self.ticker.get_mut()
            && let Some(handle) = ticker.take()
        {
            handle.abort();
        }
    }
}

/// Fetch the newest block and fan it out. A failed fetch abandons the tick
/// without sending anything.
async fn broadcast_latest_block(
    query: &QueryService,
    registry: &ConnectionRegistry,
    metrics: &Metrics,
) -> WsErrorResult<BroadcastOutcome> {
    let blocks = match query.recent_blocks(1).await {
        Ok(blocks) => blocks,
        Err(e) => {
            error!("Broadcast tick failed: {}", e);
            metrics.broadcast_tick_failed();
            return Err(e.into());
        }
    };

    let update = ServerMessage::block_update(blocks.into_iter().next());
    let payload = Utf8Bytes::from(update.to_json()?);

    let outcome = registry.broadcast(payload).await;
    metrics.broadcast_published(outcome.delivered, outcome.dropped);

    debug!(
        "Broadcast block update to {} connections ({} dropped)",
        outcome.delivered, outcome.dropped
    );

    Ok(outcome)
}
