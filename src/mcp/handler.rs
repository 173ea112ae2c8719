//! # MCP Handler Module
//!
//! Implements the Model Context Protocol methods the server answers:
//!
//! - `initialize` - server identity and capabilities
//! - `tools/list` - every registered tool with its input schema
//! - `tools/call` - runs one tool through the registry
//!
//! Notifications (requests without an id) get no response. Tool failures are
//! reported inside a successful response as an `isError` result; only
//! malformed `tools/call` requests produce JSON-RPC errors.

use serde_json::{json, Value};
use tracing::info;

use crate::{
    mcp::protocol::{error_codes, Request, Response},
    utils, AppState,
};

pub const SERVER_NAME: &str = "stellar-mcp";
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// Main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req, &state),
        "tools/call" => handle_tool_call(req, state).await,
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name: String = match utils::get_required_arg(params, "name", &req.id) {
        Ok(name) => name,
        Err(resp) => return resp,
    };
    let args = params.get("arguments").unwrap_or(&Value::Null);

    let result = state.registry.call(&state.ctx, &tool_name, args).await;
    match serde_json::to_value(result) {
        Ok(value) => Response::success(req.id, value),
        Err(e) => Response::error(req.id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}

fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION")
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions =
        "Stellar MCP server. Runs stellar CLI commands (contracts, transactions, keys, networks, XDR) and queries Stellar RPC directly.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

fn handle_tools_list(req: &Request, state: &AppState) -> Response {
    Response::success(req.id.clone(), json!({ "tools": state.registry.list() }))
}
