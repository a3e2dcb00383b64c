pub mod address_transactions_response;
pub mod balance_response;
pub mod whale_feed_response;
#[allow(clippy::module_inception)]
pub mod whales;
