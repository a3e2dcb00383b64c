#![allow(dead_code)]

//! Test infrastructure for sa-server API tests

use sa_config::{Config, RuntimeMode};
use sa_core::QueryService;
use sa_rpc::{Address, ParsedAccount, RpcBlock, RpcError, RpcGateway, RpcResult, SignatureInfo};
use sa_ws::{
    AppState, BroadcastConfig, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics,
    RealtimeService, ShutdownCoordinator,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const MINT_ADDRESS: &str = "So11111111111111111111111111111111111111112";
pub const WALLET_ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

/// Gateway with canned answers, counting every call
#[derive(Default)]
pub struct FakeGateway {
    pub slot: u64,
    pub blocks: HashMap<u64, RpcBlock>,
    pub account: Option<ParsedAccount>,
    pub signatures: Vec<SignatureInfo>,
    pub lamports: u64,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub signature_limits: Mutex<Vec<usize>>,
}

impl FakeGateway {
    fn record(&self) -> RpcResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RpcError::rpc(-32603, "node unavailable"));
        }
        Ok(())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcGateway for FakeGateway {
    async fn get_slot(&self) -> RpcResult<u64> {
        self.record()?;
        Ok(self.slot)
    }

    async fn get_block(&self, slot: u64) -> RpcResult<Option<RpcBlock>> {
        self.record()?;
        Ok(self.blocks.get(&slot).cloned())
    }

    async fn get_parsed_account(&self, _address: &Address) -> RpcResult<Option<ParsedAccount>> {
        self.record()?;
        Ok(self.account.clone())
    }

    async fn get_signatures_for_address(
        &self,
        _address: &Address,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>> {
        self.record()?;
        self.signature_limits.lock().unwrap().push(limit);
        Ok(self.signatures.iter().take(limit).cloned().collect())
    }

    async fn get_balance(&self, _address: &Address) -> RpcResult<u64> {
        self.record()?;
        Ok(self.lamports)
    }
}

pub fn block(slot: u64) -> RpcBlock {
    RpcBlock {
        blockhash: format!("hash-{}", slot),
        block_time: Some(1_700_000_000),
        transaction_count: 3,
    }
}

/// Create AppState for testing around `gateway`
pub fn create_test_app_state(gateway: Arc<FakeGateway>, mode: RuntimeMode) -> AppState {
    let query = QueryService::new(gateway);
    let registry = ConnectionRegistry::new(ConnectionLimits::default());
    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();

    let realtime = Arc::new(RealtimeService::new(
        query.clone(),
        registry.clone(),
        metrics.clone(),
        shutdown.clone(),
        BroadcastConfig::default(),
    ));

    AppState {
        query,
        realtime,
        registry,
        metrics,
        shutdown,
        config: ConnectionConfig::default(),
        mode,
        started_at: Instant::now(),
    }
}

/// Router over `gateway` with default configuration
pub fn create_test_app(gateway: Arc<FakeGateway>) -> Router {
    create_test_app_with_config(gateway, RuntimeMode::Development, &Config::default())
}

pub fn create_test_app_with_config(
    gateway: Arc<FakeGateway>,
    mode: RuntimeMode,
    config: &Config,
) -> Router {
    let state = create_test_app_state(gateway, mode);
    sa_server::build_router(state, config).expect("Failed to build router")
}

/// Issue a GET and return the status and parsed JSON body
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();

    (status, json)
}
