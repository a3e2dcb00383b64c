//! Typed views over the JSON-RPC results the gateway consumes.
//!
//! The `Raw*` structs mirror the node's wire shapes and stay private to the
//! crate; callers only see the trimmed-down public records.

use serde::Deserialize;
use serde_json::Value;

/// A confirmed block, reduced to the fields the service reports
#[derive(Debug, Clone, PartialEq)]
pub struct RpcBlock {
    pub blockhash: String,
    pub block_time: Option<i64>,
    pub transaction_count: usize,
}

/// A jsonParsed account whose data the node knew how to decode
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAccount {
    pub program: Option<String>,
    pub account_type: Option<String>,
    pub info: Value,
}

impl ParsedAccount {
    /// Integer field from `info`, accepting either a JSON number or a numeric string
    pub fn info_u64(&self, key: &str) -> Option<u64> {
        match self.info.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn info_str(&self, key: &str) -> Option<&str> {
        self.info.get(key).and_then(Value::as_str)
    }
}

/// One entry from getSignaturesForAddress
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    pub signature: String,
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub err: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Results that carry a `context` alongside the actual `value`
#[derive(Debug, Deserialize)]
pub(crate) struct WithContext<T> {
    pub value: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBlock {
    pub blockhash: String,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub signatures: Option<Vec<String>>,
    #[serde(default)]
    pub transactions: Option<Vec<Value>>,
}

impl From<RawBlock> for RpcBlock {
    fn from(raw: RawBlock) -> Self {
        let transaction_count = match (raw.signatures, raw.transactions) {
            (Some(signatures), _) => signatures.len(),
            (None, Some(transactions)) => transactions.len(),
            (None, None) => 0,
        };

        Self {
            blockhash: raw.blockhash,
            block_time: raw.block_time,
            transaction_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAccount {
    pub data: Value,
}

impl RawAccount {
    /// `data` is an object only when the node could parse it; otherwise it is
    /// a `[payload, encoding]` pair.
    pub fn into_parsed(self) -> Option<ParsedAccount> {
        let Value::Object(mut data) = self.data else {
            return None;
        };
        let Some(Value::Object(mut parsed)) = data.remove("parsed") else {
            return None;
        };

        Some(ParsedAccount {
            program: data
                .remove("program")
                .and_then(|v| v.as_str().map(String::from)),
            account_type: parsed
                .remove("type")
                .and_then(|v| v.as_str().map(String::from)),
            info: parsed.remove("info").unwrap_or(Value::Null),
        })
    }
}
