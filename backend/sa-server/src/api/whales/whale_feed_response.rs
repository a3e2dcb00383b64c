use sa_core::WhaleTransaction;

use serde::Serialize;

/// Network-wide large transfer feed. No detector feeds it yet, so it is
/// always empty.
#[derive(Debug, Default, Serialize)]
pub struct WhaleFeedResponse {
    pub transactions: Vec<WhaleTransaction>,
    pub count: usize,
}
