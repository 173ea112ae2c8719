// src/rpc/client.rs

use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::mcp::protocol::{Request, Response};

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC request failed: {status} {body}")]
    Http { status: u16, body: String },
    #[error("RPC error {code}: {message}")]
    Remote { code: i32, message: String },
    #[error("RPC response carried neither result nor error")]
    MissingResult,
    #[error("RPC transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin JSON-RPC 2.0 client. One POST per call, no retries.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: String,
    http: reqwest::Client,
}

impl RpcClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
        let request = Request::new(Value::String(Uuid::new_v4().to_string()), method, params);
        debug!("RPC {} -> {}", method, self.endpoint);

        let resp = self.http.post(&self.endpoint).json(&request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::Http { status, body });
        }

        let parsed: Response = resp.json().await?;
        if let Some(err) = parsed.error {
            return Err(RpcError::Remote {
                code: err.code,
                message: err.message,
            });
        }
        parsed.result.ok_or(RpcError::MissingResult)
    }
}
