// src/lib.rs

use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod rpc;
pub mod tools;
pub mod utils;

use cli::executor::CliExecutor;
use rpc::client::RpcClient;
use tools::error::RegistryError;
use tools::registry::{ToolContext, ToolRegistry};

/// Application state shared across all request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// CLI executor and RPC client handed to every tool run
    pub ctx: ToolContext,
    /// Immutable after startup
    pub registry: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Self, RegistryError> {
        let mut executor = CliExecutor::new(config.cli_path.clone(), config.cli_timeout);
        if let Some(max) = config.max_concurrency {
            executor = executor.with_max_concurrency(max);
        }
        let ctx = ToolContext {
            executor,
            rpc: RpcClient::new(config.rpc_url.clone()),
        };
        Ok(Self {
            config,
            ctx,
            registry: Arc::new(ToolRegistry::standard()?),
        })
    }
}
