// src/tools/catalog/rpc.rs
// Direct Stellar RPC methods, no CLI involved.

use crate::tools::params::{list, map, number, objects, string, Param};
use crate::tools::registry::ToolHandler;
use crate::tools::rpc_tool::RpcTool;

const TRANSACTION: &[Param] = &[string("transaction", "Transaction envelope XDR (base64)")];
const HASH: &[Param] = &[string("hash", "Transaction hash (hex)")];
const KEYS: &[Param] = &[list("keys", "Base64 LedgerKey XDR values")];
const EVENTS: &[Param] = &[
    number("startLedger", "Ledger sequence to start from"),
    objects("filters", "Event filters (type, contractIds, topics)"),
    map("pagination", "Pagination options (cursor, limit)"),
];

pub fn tools() -> Vec<ToolHandler> {
    vec![
        RpcTool::new("stellar_rpc_get_health", "Check RPC server health", "getHealth").into(),
        RpcTool::new(
            "stellar_rpc_get_network",
            "Get network passphrase and protocol version",
            "getNetwork",
        )
        .into(),
        RpcTool::new(
            "stellar_rpc_get_latest_ledger",
            "Get the latest ledger",
            "getLatestLedger",
        )
        .into(),
        RpcTool::new(
            "stellar_rpc_get_fee_stats",
            "Get inclusion fee statistics",
            "getFeeStats",
        )
        .into(),
        RpcTool::new(
            "stellar_rpc_get_version_info",
            "Get RPC server version information",
            "getVersionInfo",
        )
        .into(),
        RpcTool::new(
            "stellar_rpc_get_transaction",
            "Get a transaction by hash",
            "getTransaction",
        )
        .params(HASH)
        .required(&["hash"])
        .into(),
        RpcTool::new(
            "stellar_rpc_get_ledger_entries",
            "Read ledger entries by key",
            "getLedgerEntries",
        )
        .params(KEYS)
        .required(&["keys"])
        .into(),
        RpcTool::new("stellar_rpc_get_events", "Query contract events", "getEvents")
            .params(EVENTS)
            .into(),
        RpcTool::new(
            "stellar_rpc_simulate_transaction",
            "Simulate a transaction",
            "simulateTransaction",
        )
        .params(TRANSACTION)
        .required(&["transaction"])
        .into(),
        RpcTool::new(
            "stellar_rpc_send_transaction",
            "Submit a signed transaction",
            "sendTransaction",
        )
        .params(TRANSACTION)
        .required(&["transaction"])
        .into(),
    ]
}
