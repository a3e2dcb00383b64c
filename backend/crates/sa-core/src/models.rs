//! Response records returned by the query service.
//!
//! Field names serialize in camelCase for the dashboard client.

use serde::Serialize;

pub const UNKNOWN_TOKEN_NAME: &str = "Unknown Token";
pub const UNKNOWN_TOKEN_SYMBOL: &str = "UNKNOWN";
pub const PLACEHOLDER_TOKEN_A: &str = "Token A";
pub const PLACEHOLDER_TOKEN_B: &str = "Token B";
pub const UNKNOWN_COUNTERPARTY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub supply: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub address: String,
    pub token_a: String,
    pub token_b: String,
    pub liquidity: String,
    #[serde(rename = "volume24h")]
    pub volume_24h: String,
}

impl PoolInfo {
    pub fn placeholder(address: &str) -> Self {
        Self {
            address: address.to_string(),
            token_a: PLACEHOLDER_TOKEN_A.to_string(),
            token_b: PLACEHOLDER_TOKEN_B.to_string(),
            liquidity: "0".to_string(),
            volume_24h: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhaleTransaction {
    pub signature: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub timestamp: i64,
}

/// Summary of one confirmed block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub slot: u64,
    pub blockhash: String,
    /// Unix seconds; 0 when the node does not know it
    pub block_time: i64,
    pub transaction_count: usize,
}
