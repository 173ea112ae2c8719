//! MCP method dispatch.

use serde_json::{json, Value};

use stellar_mcp_server::{
    config::Config,
    mcp::{
        handler::{handle_mcp_request, PROTOCOL_VERSION, SERVER_NAME},
        protocol::{error_codes, Request},
    },
    AppState,
};

fn state() -> AppState {
    let config = Config {
        cli_path: "/nonexistent/stellar".into(),
        ..Config::default()
    };
    AppState::new(config).unwrap()
}

fn request(method: &str, params: Option<Value>) -> Request {
    Request::new(json!(1), method, params)
}

#[tokio::test]
async fn unknown_tool_is_an_error_result_not_a_protocol_error() {
    let resp = handle_mcp_request(
        request(
            "tools/call",
            Some(json!({"name": "stellar_nonexistent", "arguments": {}})),
        ),
        state(),
    )
    .await
    .unwrap();

    assert!(resp.error.is_none());
    assert_eq!(
        resp.result.unwrap(),
        json!({
            "content": [{"type": "text", "text": "Unknown tool: stellar_nonexistent"}],
            "isError": true
        })
    );
}

#[tokio::test]
async fn initialize_reports_server_identity() {
    let resp = handle_mcp_request(request("initialize", Some(json!({}))), state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    assert_eq!(result["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn tools_list_exposes_schemas() {
    let resp = handle_mcp_request(request("tools/list", None), state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    let tools = result["tools"].as_array().unwrap();

    let deploy = tools
        .iter()
        .find(|t| t["name"] == "stellar_contract_deploy")
        .unwrap();
    assert_eq!(deploy["inputSchema"]["type"], "object");
    assert!(deploy["inputSchema"]["properties"]["wasmPath"].is_object());

    let health = tools
        .iter()
        .find(|t| t["name"] == "stellar_rpc_get_health")
        .unwrap();
    assert!(health["description"].as_str().is_some());
}

#[tokio::test]
async fn cli_failure_surfaces_inside_the_result() {
    let resp = handle_mcp_request(
        request("tools/call", Some(json!({"name": "stellar_doctor"}))),
        state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Error: Stellar CLI not found"), "{}", text);
}

#[tokio::test]
async fn malformed_calls_are_invalid_params() {
    let resp = handle_mcp_request(request("tools/call", None), state())
        .await
        .unwrap();
    assert_eq!(resp.error.unwrap().code, error_codes::INVALID_PARAMS);

    let resp = handle_mcp_request(
        request("tools/call", Some(json!({"arguments": {}}))),
        state(),
    )
    .await
    .unwrap();
    assert_eq!(resp.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn notifications_and_unknown_methods() {
    let note = Request::new(Value::Null, "notifications/initialized", None);
    assert!(handle_mcp_request(note, state()).await.is_none());

    let resp = handle_mcp_request(request("resources/list", None), state())
        .await
        .unwrap();
    assert_eq!(resp.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
}
