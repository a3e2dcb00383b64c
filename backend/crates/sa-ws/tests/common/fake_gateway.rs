#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use sa_rpc::{Address, ParsedAccount, RpcBlock, RpcError, RpcGateway, RpcResult, SignatureInfo};

/// Gateway that reports an ever-advancing slot, each with a block
pub struct FakeGateway {
    slot: AtomicU64,
    failing: AtomicBool,
}

impl FakeGateway {
    pub fn new(start_slot: u64) -> Self {
        Self {
            slot: AtomicU64::new(start_slot),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl RpcGateway for FakeGateway {
    async fn get_slot(&self) -> RpcResult<u64> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RpcError::rpc(-32603, "node unavailable"));
        }
        Ok(self.slot.fetch_add(1, Ordering::SeqCst))
    }

    async fn get_block(&self, slot: u64) -> RpcResult<Option<RpcBlock>> {
        Ok(Some(RpcBlock {
            blockhash: format!("hash-{}", slot),
            block_time: Some(1_700_000_000),
            transaction_count: 3,
        }))
    }

    async fn get_parsed_account(&self, _address: &Address) -> RpcResult<Option<ParsedAccount>> {
        Ok(None)
    }

    async fn get_signatures_for_address(
        &self,
        _address: &Address,
        _limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>> {
        Ok(Vec::new())
    }

    async fn get_balance(&self, _address: &Address) -> RpcResult<u64> {
        Ok(0)
    }
}
