use crate::{Address, ParsedAccount, RpcBlock, RpcResult, SignatureInfo};

use async_trait::async_trait;

/// Read-only access to a blockchain JSON-RPC node.
///
/// All reads use "confirmed" commitment. Implementations must be shareable
/// across request handlers and the broadcast ticker.
#[async_trait]
pub trait RpcGateway: Send + Sync {
    /// Current confirmed slot
    async fn get_slot(&self) -> RpcResult<u64>;

    /// Block at `slot`, or `None` when the slot has no retrievable block
    async fn get_block(&self, slot: u64) -> RpcResult<Option<RpcBlock>>;

    /// Account at `address` with jsonParsed data, or `None` when the account
    /// does not exist or its data is not parseable
    async fn get_parsed_account(&self, address: &Address) -> RpcResult<Option<ParsedAccount>>;

    /// Most recent signatures involving `address`, newest first
    async fn get_signatures_for_address(
        &self,
        address: &Address,
        limit: usize,
    ) -> RpcResult<Vec<SignatureInfo>>;

    /// Balance in lamports
    async fn get_balance(&self, address: &Address) -> RpcResult<u64>;
}
