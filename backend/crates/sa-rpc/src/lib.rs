pub mod address;
pub mod client;
pub mod error;
pub mod gateway;
pub mod rpc_types;

pub use address::Address;
pub use client::SolanaRpcClient;
pub use error::{Result as RpcResult, RpcError};
pub use gateway::RpcGateway;
pub use rpc_types::{ParsedAccount, RpcBlock, SignatureInfo};


/// Number of lamports in one SOL
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Commitment level used for every read
pub const COMMITMENT: &str = "confirmed";

/// JSON-RPC error codes meaning "there is no block to return for this slot"
/// (block not available, slot skipped, long-term storage slot skipped).
pub const BLOCK_UNAVAILABLE_CODES: [i64; 3] = [-32004, -32007, -32009];
