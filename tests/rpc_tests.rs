//! Direct RPC tools against a mock Stellar RPC server.

use mockito::{mock, Matcher};
use serde_json::json;

use stellar_mcp_server::{
    cli::CliExecutor,
    rpc::{RpcClient, RpcError},
    tools::{ToolContext, ToolRegistry},
};

fn context(path: &str) -> ToolContext {
    ToolContext {
        executor: CliExecutor::new("/nonexistent/stellar", std::time::Duration::from_secs(1)),
        rpc: RpcClient::new(format!("{}{}", mockito::server_url(), path)),
    }
}

#[tokio::test]
async fn forwards_declared_params_and_pretty_prints_result() {
    let _m = mock("POST", "/tx")
        .match_body(Matcher::PartialJson(json!({
            "jsonrpc": "2.0",
            "method": "getTransaction",
            "params": {"hash": "abc123"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":"1","result":{"status":"SUCCESS","ledger":42}}"#)
        .create();

    let registry = ToolRegistry::standard().unwrap();
    let result = registry
        .call(
            &context("/tx"),
            "stellar_rpc_get_transaction",
            &json!({"hash": "abc123", "ignored": true}),
        )
        .await;

    assert!(!result.is_error, "{}", result.joined_text());
    let body: serde_json::Value = serde_json::from_str(&result.joined_text()).unwrap();
    assert_eq!(body, json!({"status": "SUCCESS", "ledger": 42}));
}

#[tokio::test]
async fn remote_error_becomes_error_result() {
    let _m = mock("POST", "/err")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":"1","error":{"code":-32602,"message":"invalid hash"}}"#)
        .create();

    let registry = ToolRegistry::standard().unwrap();
    let result = registry
        .call(&context("/err"), "stellar_rpc_get_transaction", &json!({"hash": "zz"}))
        .await;

    assert!(result.is_error);
    assert_eq!(result.joined_text(), "Error: RPC error -32602: invalid hash");
}

#[tokio::test]
async fn http_status_failure_is_reported() {
    let _m = mock("POST", "/down")
        .with_status(503)
        .with_body("unavailable")
        .create();

    let client = RpcClient::new(format!("{}/down", mockito::server_url()));
    let err = client.call("getHealth", None).await.unwrap_err();
    match err {
        RpcError::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn null_result_is_missing() {
    let _m = mock("POST", "/null")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":"1","result":null}"#)
        .create();

    let client = RpcClient::new(format!("{}/null", mockito::server_url()));
    let err = client.call("getHealth", None).await.unwrap_err();
    assert!(matches!(err, RpcError::MissingResult));
}
