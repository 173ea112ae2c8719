// src/tools/rpc_tool.rs

use serde_json::{Map, Value};

use crate::cli::args::{self, normalize_key, Params};
use crate::rpc::client::RpcClient;
use crate::tools::error::ToolError;
use crate::tools::params::{input_schema, Param};

/// A tool that forwards its arguments to one Stellar RPC method.
#[derive(Debug, Clone)]
pub struct RpcTool {
    name: &'static str,
    description: &'static str,
    method: &'static str,
    params: &'static [Param],
    required: &'static [&'static str],
}

impl RpcTool {
    pub const fn new(name: &'static str, description: &'static str, method: &'static str) -> Self {
        Self {
            name,
            description,
            method,
            params: &[],
            required: &[],
        }
    }

    pub fn params(mut self, params: &'static [Param]) -> Self {
        self.params = params;
        self
    }

    pub fn required(mut self, keys: &'static [&'static str]) -> Self {
        self.required = keys;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn input_schema(&self) -> Value {
        input_schema(self.params, self.required)
    }

    /// The `params` object sent to the server: declared keys only, values
    /// passed through with their JSON structure intact. `None` when the
    /// method takes no parameters.
    pub fn request_params(&self, arguments: &Value) -> Result<Option<Value>, ToolError> {
        args::require(&Params::from_json(arguments)?, self.required)?;
        if self.params.is_empty() {
            return Ok(None);
        }

        let mut out = Map::new();
        if let Value::Object(map) = arguments {
            for (key, value) in map {
                let key = normalize_key(key);
                if value.is_null() || out.contains_key(&key) {
                    continue;
                }
                if self.params.iter().any(|p| p.name == key) {
                    out.insert(key, value.clone());
                }
            }
        }
        Ok(Some(Value::Object(out)))
    }

    pub async fn run(&self, client: &RpcClient, arguments: &Value) -> Result<String, ToolError> {
        let params = self.request_params(arguments)?;
        let result = client.call(self.method, params).await?;
        Ok(serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::params::{list, string};
    use serde_json::json;

    #[test]
    fn only_declared_keys_are_forwarded() {
        const PARAMS: &[Param] = &[string("hash", "Transaction hash"), list("keys", "Ledger keys")];
        let tool = RpcTool::new("t", "d", "getTransaction").params(PARAMS).required(&["hash"]);
        let params = tool
            .request_params(&json!({"hash": "ab", "extra": 1, "keys": null}))
            .unwrap();
        assert_eq!(params, Some(json!({"hash": "ab"})));
        assert!(tool.request_params(&json!({})).is_err());
    }

    #[test]
    fn parameterless_methods_send_nothing() {
        let tool = RpcTool::new("t", "d", "getHealth");
        assert_eq!(tool.request_params(&Value::Null).unwrap(), None);
    }
}
