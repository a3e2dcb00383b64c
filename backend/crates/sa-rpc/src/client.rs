use crate::{
    Address, BLOCK_UNAVAILABLE_CODES, COMMITMENT, ParsedAccount, RpcBlock, RpcError, RpcGateway,
    RpcResult, SignatureInfo,
    rpc_types::{JsonRpcResponse, RawAccount, RawBlock, WithContext},
};

use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// JSON-RPC 2.0 client for a Solana-compatible node
pub struct SolanaRpcClient {
    pub url: String,
    client: ReqwestClient,
    next_id: AtomicU64,
}

impl SolanaRpcClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `url` - RPC endpoint (e.g., "https://api.mainnet-beta.solana.com")
    /// * `timeout` - Per-request timeout
    pub fn new(url: &str, timeout: Duration) -> RpcResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            url: url.to_string(),
            client,
            next_id: AtomicU64::new(1),
        })
    }

    /// Issue one JSON-RPC call. `Ok(None)` means the node answered with a
    /// null result.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> RpcResult<Option<T>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let started = Instant::now();
        let response = self.client.post(&self.url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("RPC {} returned HTTP {}", method, status);
            return Err(RpcError::Status {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.bytes().await?;
        let envelope: JsonRpcResponse<T> = serde_json::from_slice(&body)?;

        debug!(
            "RPC {} (id {}) completed in {:?}",
            method,
            id,
            started.elapsed()
        );

        if let Some(error) = envelope.error {
            return Err(RpcError::rpc(error.code, error.message));
        }

        Ok(envelope.result)
    }

    /// Like `call`, but a null result is an error
    async fn call_required<T: DeserializeOwned>(&self, method: &str, params: Value) -> RpcResult<T> {
        self.call(method, params)
            .await?
            .ok_or_else(|| RpcError::MissingResult {
                method: method.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[async_trait]
impl RpcGateway for SolanaRpcClient {
    async fn get_slot(&self) -> RpcResult<u64> {
        self.call_required("getSlot", json!([{ "commitment": COMMITMENT }]))
            .await
    }

    async fn get_block(&self, slot: u64) -> RpcResult<Option<RpcBlock>> {
        let params = json!([
            slot,
            {
                "commitment": COMMITMENT,
                "encoding": "json",
                "transactionDetails": "signatures",
                "rewards": false,
                "maxSupportedTransactionVersion": 0,
            }
        ]);

        match self.call::<RawBlock>("getBlock", params).await {
            Ok(block) => Ok(block.map(RpcBlock::from)),
            Err(e) if e.rpc_code().is_some_and(|c| BLOCK_UNAVAILABLE_CODES.contains(&c)) => {
                debug!("No block for slot {}: {}", slot, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_parsed_account(&self, address: &Address) -> RpcResult<Option<ParsedAccount>> {
        let params = json!([
            address.as_str(),
            { "commitment": COMMITMENT, "encoding": "jsonParsed" }
        ]);

        let account: WithContext<Option<RawAccount>> =
            self.call_required("getAccountInfo", params).await?;

        Ok(account.value.and_then(RawAccount::into_parsed))
    }

    async fn get_signatures_for_address(
        &self,
        address: &Address,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>> {
        let params = json!([
            address.as_str(),
            { "commitment": COMMITMENT, "limit": limit }
        ]);

        self.call_required("getSignaturesForAddress", params).await
    }

    async fn get_balance(&self, address: &Address) -> RpcResult<u64> {
        let params = json!([address.as_str(), { "commitment": COMMITMENT }]);

        let balance: WithContext<u64> = self.call_required("getBalance", params).await?;
        Ok(balance.value)
    }
}
