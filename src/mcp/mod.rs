// src/mcp/mod.rs
pub mod handler;
pub mod protocol;
pub mod stdio;
