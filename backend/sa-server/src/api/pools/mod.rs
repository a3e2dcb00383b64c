pub mod pool_list_response;
#[allow(clippy::module_inception)]
pub mod pools;
