// src/tools/registry.rs
//! Name -> handler mapping for every exposed tool.
//!
//! Built once at startup from an ordered list of category tables and never
//! mutated afterwards, so it can be shared across tasks behind an `Arc`
//! without locking.

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::cli::executor::CliExecutor;
use crate::mcp::protocol::ToolResult;
use crate::rpc::client::RpcClient;
use crate::tools::catalog;
use crate::tools::cli_tool::CliTool;
use crate::tools::error::{RegistryError, ToolError};
use crate::tools::rpc_tool::RpcTool;

/// Everything a handler may use while running.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub executor: CliExecutor,
    pub rpc: RpcClient,
}

#[derive(Debug, Clone)]
pub enum ToolHandler {
    Cli(CliTool),
    Rpc(RpcTool),
}

impl From<CliTool> for ToolHandler {
    fn from(tool: CliTool) -> Self {
        ToolHandler::Cli(tool)
    }
}

impl From<RpcTool> for ToolHandler {
    fn from(tool: RpcTool) -> Self {
        ToolHandler::Rpc(tool)
    }
}

impl ToolHandler {
    pub fn name(&self) -> &'static str {
        match self {
            ToolHandler::Cli(t) => t.name(),
            ToolHandler::Rpc(t) => t.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolHandler::Cli(t) => t.description(),
            ToolHandler::Rpc(t) => t.description(),
        }
    }

    pub fn input_schema(&self) -> Value {
        match self {
            ToolHandler::Cli(t) => t.input_schema(),
            ToolHandler::Rpc(t) => t.input_schema(),
        }
    }

    pub async fn run(&self, ctx: &ToolContext, arguments: &Value) -> Result<String, ToolError> {
        match self {
            ToolHandler::Cli(t) => t.run(&ctx.executor, arguments).await,
            ToolHandler::Rpc(t) => t.run(&ctx.rpc, arguments).await,
        }
    }

    pub fn failure_text(&self, err: &ToolError) -> String {
        match self {
            ToolHandler::Cli(t) => t.failure_text(err),
            ToolHandler::Rpc(_) => format!("Error: {}", err),
        }
    }
}

#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolHandler>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Folds category tables, in order, into one registry. A name seen twice
    /// is an error rather than a silent override.
    pub fn build<I>(categories: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Vec<ToolHandler>>,
    {
        categories
            .into_iter()
            .flatten()
            .try_fold(
                ToolRegistry {
                    tools: Vec::new(),
                    index: HashMap::new(),
                },
                |mut registry, tool| {
                    let name = tool.name();
                    if registry.index.contains_key(name) {
                        return Err(RegistryError::DuplicateTool(name.to_string()));
                    }
                    registry.index.insert(name, registry.tools.len());
                    registry.tools.push(tool);
                    Ok(registry)
                },
            )
    }

    /// Every CLI category followed by the direct RPC tools.
    pub fn standard() -> Result<Self, RegistryError> {
        let registry = Self::build(catalog::categories())?;
        info!("Registered {} tools", registry.len());
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ToolHandler> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(ToolHandler::name)
    }

    /// `tools/list` entries in registration order.
    pub fn list(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect()
    }

    /// Runs a tool and wraps the outcome in the result envelope. Never fails:
    /// every error becomes an `isError` result.
    pub async fn call(&self, ctx: &ToolContext, name: &str, arguments: &Value) -> ToolResult {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return ToolResult::error(ToolError::UnknownTool(name.to_string()).to_string());
        };

        match tool.run(ctx, arguments).await {
            Ok(text) => ToolResult::text(text),
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                ToolResult::error(tool.failure_text(&e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Word;

    fn tool(name: &'static str) -> ToolHandler {
        CliTool::new(name, "test tool", &[Word::Lit("doctor")]).into()
    }

    #[test]
    fn fold_keeps_registration_order() {
        let registry =
            ToolRegistry::build(vec![vec![tool("a"), tool("b")], vec![tool("c")]]).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert!(registry.get("b").is_some());
        assert!(registry.get("d").is_none());
    }

    #[test]
    fn duplicate_names_fail_the_build() {
        let err = ToolRegistry::build(vec![vec![tool("a")], vec![tool("a")]]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTool("a".into()));
    }

    #[test]
    fn standard_catalogue_is_consistent() {
        let registry = ToolRegistry::standard().unwrap();
        assert!(registry.len() > 70);
        for entry in registry.list() {
            let name = entry["name"].as_str().unwrap();
            assert!(name.starts_with("stellar_"), "{}", name);
            let properties = entry["inputSchema"]["properties"].as_object().unwrap();
            for required in entry["inputSchema"]["required"].as_array().unwrap() {
                let key = required.as_str().unwrap();
                assert!(properties.contains_key(key), "{} requires undeclared '{}'", name, key);
            }
        }
    }
}
