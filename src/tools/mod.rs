// src/tools/mod.rs
// MCP tool surface: declarations, rendering, and the dispatch registry.
pub mod catalog;
pub mod cli_tool;
pub mod error;
pub mod params;
pub mod registry;
pub mod render;
pub mod reports;
pub mod rpc_tool;

pub use cli_tool::CliTool;
pub use error::{RegistryError, ToolError};
pub use registry::{ToolContext, ToolHandler, ToolRegistry};
pub use rpc_tool::RpcTool;
