use crate::{RpcError, RpcResult};

use std::fmt;

const PUBKEY_BYTES: usize = 32;

/// A base58-encoded 32-byte account address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    #[track_caller]
    pub fn parse(value: &str) -> RpcResult<Self> {
        let bytes = bs58::decode(value)
            .into_vec()
            .map_err(|e| RpcError::invalid_address(value, e.to_string()))?;

        if bytes.len() != PUBKEY_BYTES {
            return Err(RpcError::invalid_address(
                value,
                format!("expected {} bytes, got {}", PUBKEY_BYTES, bytes.len()),
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
