pub mod token_holders_response;
#[allow(clippy::module_inception)]
pub mod tokens;
