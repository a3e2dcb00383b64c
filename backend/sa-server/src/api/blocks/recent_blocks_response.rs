use sa_core::BlockInfo;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecentBlocksResponse {
    pub blocks: Vec<BlockInfo>,
    pub count: usize,
}

impl From<Vec<BlockInfo>> for RecentBlocksResponse {
    fn from(blocks: Vec<BlockInfo>) -> Self {
        Self {
            count: blocks.len(),
            blocks,
        }
    }
}
