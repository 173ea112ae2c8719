// src/rpc/mod.rs
// Direct JSON-RPC access to a Stellar RPC server.
pub mod client;

pub use client::{RpcClient, RpcError};
