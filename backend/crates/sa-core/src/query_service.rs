use crate::{
    BlockInfo, PoolInfo, QueryResult, TokenInfo, WhaleTransaction,
    models::{UNKNOWN_COUNTERPARTY, UNKNOWN_TOKEN_NAME, UNKNOWN_TOKEN_SYMBOL},
};

use std::sync::Arc;

use log::debug;
use sa_rpc::{Address, LAMPORTS_PER_SOL, RpcGateway};

const MINT_ACCOUNT_TYPE: &str = "mint";

/// Stateless façade that turns dashboard queries into gateway calls.
///
/// Cheap to clone; every clone shares the same gateway.
#[derive(Clone)]
pub struct QueryService {
    gateway: Arc<dyn RpcGateway>,
}

impl QueryService {
    pub fn new(gateway: Arc<dyn RpcGateway>) -> Self {
        Self { gateway }
    }

    /// Walk back from the current slot, returning up to `limit` blocks newest
    /// first. Slots without a retrievable block are left out.
    pub async fn recent_blocks(&self, limit: usize) -> QueryResult<Vec<BlockInfo>> {
        let current = self.gateway.get_slot().await?;
        let mut blocks = Vec::with_capacity(limit);

        for offset in 0..limit as u64 {
            let Some(slot) = current.checked_sub(offset) else {
                break;
            };

            match self.gateway.get_block(slot).await? {
                Some(block) => blocks.push(BlockInfo {
                    slot,
                    blockhash: block.blockhash,
                    block_time: block.block_time.unwrap_or(0),
                    transaction_count: block.transaction_count,
                }),
                None => debug!("Slot {} has no block, skipping", slot),
            }
        }

        Ok(blocks)
    }

    /// Token metadata if `address` is a parsed mint account
    pub async fn token_info(&self, address: &str) -> QueryResult<Option<TokenInfo>> {
        let address = Address::parse(address)?;

        let Some(account) = self.gateway.get_parsed_account(&address).await? else {
            return Ok(None);
        };

        if account.account_type.as_deref() != Some(MINT_ACCOUNT_TYPE) {
            return Ok(None);
        }

        let decimals = account
            .info_u64("decimals")
            .and_then(|d| u8::try_from(d).ok())
            .unwrap_or(0);
        let supply = account
            .info_str("supply")
            .map(String::from)
            .or_else(|| account.info_u64("supply").map(|s| s.to_string()))
            .unwrap_or_else(|| "0".to_string());

        Ok(Some(TokenInfo {
            address: address.to_string(),
            name: UNKNOWN_TOKEN_NAME.to_string(),
            symbol: UNKNOWN_TOKEN_SYMBOL.to_string(),
            decimals,
            supply,
        }))
    }

    pub async fn pool_info(&self, address: &str) -> QueryResult<PoolInfo> {
        Ok(PoolInfo::placeholder(address))
    }

    /// Recent signatures for `address` shaped as whale transactions
    pub async fn transactions_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> QueryResult<Vec<WhaleTransaction>> {
        let parsed = Address::parse(address)?;
        let signatures = self
            .gateway
            .get_signatures_for_address(&parsed, limit)
            .await?;

        Ok(signatures
            .into_iter()
            .map(|info| WhaleTransaction {
                signature: info.signature,
                from: address.to_string(),
                to: UNKNOWN_COUNTERPARTY.to_string(),
                amount: "0".to_string(),
                timestamp: info.block_time.unwrap_or(0),
            })
            .collect())
    }

    /// Balance in whole SOL
    pub async fn balance(&self, address: &str) -> QueryResult<f64> {
        let address = Address::parse(address)?;
        let lamports = self.gateway.get_balance(&address).await?;

        Ok(lamports as f64 / LAMPORTS_PER_SOL)
    }
}
