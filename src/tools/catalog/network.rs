// src/tools/catalog/network.rs

use crate::cli::args::Word;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{boolean, choice, map, string, Param, CONFIG_DIR, OUTPUT, RPC};
use crate::tools::registry::ToolHandler;

const NAME: Param = string("name", "Network name");

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_network_add",
            "Add a network configuration",
            &[Word::Lit("network"), Word::Lit("add"), Word::Slot("name")],
        )
        .params(&[
            NAME,
            string("rpcUrl", "RPC server endpoint"),
            string("networkPassphrase", "Network passphrase"),
            map("rpcHeaders", "Extra HTTP headers sent to the RPC server"),
            CONFIG_DIR,
        ])
        .required(&["name", "rpcUrl", "networkPassphrase"])
        .into(),
        CliTool::new(
            "stellar_network_remove",
            "Remove a network configuration",
            &[Word::Lit("network"), Word::Lit("rm"), Word::Slot("name")],
        )
        .params(&[NAME, CONFIG_DIR])
        .required(&["name"])
        .into(),
        CliTool::new(
            "stellar_network_list",
            "List configured networks",
            &[Word::Lit("network"), Word::Lit("ls")],
        )
        .params(&[boolean("long", "Show more detail"), CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_network_use",
            "Set the default network",
            &[Word::Lit("network"), Word::Lit("use"), Word::Slot("name")],
        )
        .params(&[NAME, CONFIG_DIR])
        .required(&["name"])
        .into(),
        CliTool::new(
            "stellar_network_health",
            "Check the health of the configured RPC server",
            &[Word::Lit("network"), Word::Lit("health")],
        )
        .params(RPC)
        .params(&[OUTPUT, CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_network_info",
            "Show information about the configured network",
            &[Word::Lit("network"), Word::Lit("info")],
        )
        .params(RPC)
        .params(&[OUTPUT, CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_network_settings",
            "Show the network's ledger configuration settings",
            &[Word::Lit("network"), Word::Lit("settings")],
        )
        .params(RPC)
        .params(&[
            boolean("internal", "Include internal config settings"),
            choice("output", &["xdr", "json", "json-formatted"], "Output format"),
            CONFIG_DIR,
        ])
        .into(),
    ]
}
