use serde::Serialize;

/// Holder listing for a token mint. Holder indexing is not wired up, so the
/// list is always empty.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHoldersResponse {
    pub holders: Vec<String>,
    pub total_holders: usize,
}
