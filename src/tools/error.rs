// src/tools/error.rs

use thiserror::Error;

use crate::cli::error::{ArgError, CliError};
use crate::rpc::client::RpcError;

/// Anything that can go wrong between receiving a tool call and producing
/// its text. Converted to an `isError` envelope at the registry boundary.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error(transparent)]
    Args(#[from] ArgError),
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool '{0}' is registered more than once")]
    DuplicateTool(String),
}
