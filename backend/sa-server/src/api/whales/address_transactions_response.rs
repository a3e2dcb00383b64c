use sa_core::WhaleTransaction;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddressTransactionsResponse {
    pub address: String,
    pub transactions: Vec<WhaleTransaction>,
    pub count: usize,
}

impl AddressTransactionsResponse {
    pub fn new(address: String, transactions: Vec<WhaleTransaction>) -> Self {
        Self {
            address,
            count: transactions.len(),
            transactions,
        }
    }
}
