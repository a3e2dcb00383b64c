use crate::{ApiError, ApiResult};

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const MIN_ADDRESS_LEN: usize = 32;
const MAX_ADDRESS_LEN: usize = 44;

/// Cheap syntactic check before anything reaches the RPC node.
///
/// Accepts 32 to 44 base58 characters. Whether the text decodes to a real
/// 32-byte key is left to the gateway.
#[track_caller]
pub fn validate_address(address: &str, kind: &str) -> ApiResult<()> {
    let valid_len = (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len());
    let valid_chars = address.chars().all(|c| BASE58_ALPHABET.contains(c));

    if valid_len && valid_chars {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!("Invalid {} address", kind)))
    }
}
