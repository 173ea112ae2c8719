// src/tools/catalog/mod.rs
// Tool tables, one module per `stellar` command family.
pub mod container;
pub mod contract;
pub mod keys;
pub mod ledger;
pub mod network;
pub mod rpc;
pub mod system;
pub mod tx;
pub mod xdr;

use crate::tools::registry::ToolHandler;

/// Category tables in registration order.
pub fn categories() -> Vec<Vec<ToolHandler>> {
    vec![
        contract::tools(),
        tx::tools(),
        keys::tools(),
        network::tools(),
        ledger::tools(),
        container::tools(),
        xdr::tools(),
        system::tools(),
        rpc::tools(),
    ]
}
