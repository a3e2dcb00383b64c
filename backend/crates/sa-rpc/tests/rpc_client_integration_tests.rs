//! Integration tests for the JSON-RPC client using wiremock mock server

use sa_rpc::{Address, RpcError, RpcGateway, SolanaRpcClient};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method},
};

const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

fn client_for(server: &MockServer) -> SolanaRpcClient {
    SolanaRpcClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn rpc_result(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": result
    }))
}

fn rpc_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": code, "message": message }
    }))
}

#[tokio::test]
async fn test_get_slot_uses_confirmed_commitment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "getSlot",
            "params": [{ "commitment": "confirmed" }]
        })))
        .respond_with(rpc_result(json!(250_000_000u64)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let slot = client_for(&mock_server).get_slot().await.unwrap();

    assert_eq!(slot, 250_000_000);
}

#[tokio::test]
async fn test_get_block_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "getBlock",
            "params": [100, {
                "transactionDetails": "signatures",
                "rewards": false,
                "maxSupportedTransactionVersion": 0
            }]
        })))
        .respond_with(rpc_result(json!({
            "blockhash": "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin",
            "previousBlockhash": "11111111111111111111111111111111",
            "parentSlot": 99,
            "blockTime": 1_700_000_000,
            "blockHeight": 90,
            "signatures": ["s1", "s2"]
        })))
        .mount(&mock_server)
        .await;

    let block = client_for(&mock_server)
        .get_block(100)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(block.blockhash, "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
    assert_eq!(block.block_time, Some(1_700_000_000));
    assert_eq!(block.transaction_count, 2);
}

#[tokio::test]
async fn test_get_block_skipped_slot_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "getBlock" })))
        .respond_with(rpc_error(
            -32007,
            "Slot 100 was skipped, or missing due to ledger jump to recent snapshot",
        ))
        .mount(&mock_server)
        .await;

    let block = client_for(&mock_server).get_block(100).await.unwrap();

    assert!(block.is_none());
}

#[tokio::test]
async fn test_get_block_null_result_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(rpc_result(json!(null)))
        .mount(&mock_server)
        .await;

    let block = client_for(&mock_server).get_block(7).await.unwrap();

    assert!(block.is_none());
}

#[tokio::test]
async fn test_get_block_other_rpc_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(rpc_error(-32602, "Invalid params"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_block(7).await.unwrap_err();

    assert_eq!(err.rpc_code(), Some(-32602));
    assert!(err.to_string().contains("Invalid params"));
}

#[tokio::test]
async fn test_get_parsed_account_mint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "getAccountInfo",
            "params": [USDC_MINT, { "encoding": "jsonParsed" }]
        })))
        .respond_with(rpc_result(json!({
            "context": { "slot": 1 },
            "value": {
                "data": {
                    "program": "spl-token",
                    "parsed": {
                        "type": "mint",
                        "info": { "decimals": 6, "supply": "1000000" }
                    },
                    "space": 82
                },
                "executable": false,
                "lamports": 1461600,
                "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
                "rentEpoch": 0
            }
        })))
        .mount(&mock_server)
        .await;

    let address = Address::parse(USDC_MINT).unwrap();
    let account = client_for(&mock_server)
        .get_parsed_account(&address)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(account.info_u64("decimals"), Some(6));
    assert_eq!(account.info_str("supply"), Some("1000000"));
}

#[tokio::test]
async fn test_get_parsed_account_missing_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(rpc_result(json!({ "context": { "slot": 1 }, "value": null })))
        .mount(&mock_server)
        .await;

    let address = Address::parse(USDC_MINT).unwrap();
    let account = client_for(&mock_server)
        .get_parsed_account(&address)
        .await
        .unwrap();

    assert!(account.is_none());
}

#[tokio::test]
async fn test_get_signatures_passes_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "getSignaturesForAddress",
            "params": [USDC_MINT, { "limit": 2 }]
        })))
        .respond_with(rpc_result(json!([
            { "signature": "a", "slot": 10, "err": null, "memo": null, "blockTime": 1000 },
            { "signature": "b", "slot": 9, "err": null, "memo": null, "blockTime": null }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let address = Address::parse(USDC_MINT).unwrap();
    let signatures = client_for(&mock_server)
        .get_signatures_for_address(&address, 2)
        .await
        .unwrap();

    assert_eq!(signatures.len(), 2);
    assert_eq!(signatures[0].signature, "a");
    assert_eq!(signatures[0].block_time, Some(1000));
    assert_eq!(signatures[1].block_time, None);
}

#[tokio::test]
async fn test_get_balance_returns_lamports() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "getBalance" })))
        .respond_with(rpc_result(json!({
            "context": { "slot": 1 },
            "value": 2_500_000_000u64
        })))
        .mount(&mock_server)
        .await;

    let address = Address::parse(USDC_MINT).unwrap();
    let lamports = client_for(&mock_server)
        .get_balance(&address)
        .await
        .unwrap();

    assert_eq!(lamports, 2_500_000_000);
}

#[tokio::test]
async fn test_http_error_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_slot().await.unwrap_err();

    assert!(matches!(err, RpcError::Status { status: 429, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_slot().await.unwrap_err();

    assert!(matches!(err, RpcError::Json { .. }));
}

#[tokio::test]
async fn test_null_slot_is_missing_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(rpc_result(json!(null)))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_slot().await.unwrap_err();

    assert!(matches!(err, RpcError::MissingResult { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = SolanaRpcClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let err = client.get_slot().await.unwrap_err();

    assert!(matches!(err, RpcError::Http { .. }));
}
