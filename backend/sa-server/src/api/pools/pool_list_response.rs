use sa_core::PoolInfo;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct PoolListResponse {
    pub pools: Vec<PoolInfo>,
    pub total: usize,
}
