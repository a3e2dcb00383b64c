#[allow(clippy::module_inception)]
pub mod blocks;
pub mod recent_blocks_response;
