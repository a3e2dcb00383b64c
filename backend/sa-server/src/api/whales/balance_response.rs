use serde::Serialize;

/// Wallet balance. `balance` and `balanceSOL` both carry whole SOL.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: f64,
    #[serde(rename = "balanceSOL")]
    pub balance_sol: f64,
}

impl BalanceResponse {
    pub fn new(address: String, sol: f64) -> Self {
        Self {
            address,
            balance: sol,
            balance_sol: sol,
        }
    }
}
