// src/tools/catalog/ledger.rs
// Chain data read through the CLI: events, ledgers, fee stats, snapshots.

use crate::cli::args::Word;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{choice, list, number, string, CONFIG_DIR, OUTPUT, RPC};
use crate::tools::registry::ToolHandler;

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_events_watch",
            "Fetch contract events",
            &[Word::Lit("events")],
        )
        .params(&[
            number("startLedger", "Ledger sequence to start from"),
            string("cursor", "Paging cursor"),
            choice("output", &["pretty", "plain", "json"], "Output format"),
            number("count", "Maximum number of events"),
            list("contractIds", "Only events from these contracts"),
            list("topicFilters", "Topic filters"),
            choice("eventType", &["all", "contract", "system"], "Event type"),
            CONFIG_DIR,
        ])
        .params(RPC)
        .flags(&[
            ("contractIds", "--id"),
            ("topicFilters", "--topic"),
            ("eventType", "--type"),
        ])
        .into(),
        CliTool::new(
            "stellar_ledger_latest",
            "Get the latest ledger",
            &[Word::Lit("ledger"), Word::Lit("latest")],
        )
        .params(RPC)
        .params(&[OUTPUT])
        .into(),
        CliTool::new(
            "stellar_ledger_fetch",
            "Fetch ledgers starting at a sequence number",
            &[Word::Lit("ledger"), Word::Lit("fetch"), Word::Slot("sequence")],
        )
        .params(&[
            string("sequence", "Ledger sequence number"),
            number("limit", "Number of ledgers to fetch"),
        ])
        .params(RPC)
        .params(&[
            OUTPUT,
            choice("xdrFormat", &["json", "xdr"], "Format of XDR fields"),
        ])
        .required(&["sequence"])
        .into(),
        CliTool::new(
            "stellar_fee_stats",
            "Show inclusion fee statistics",
            &[Word::Lit("fee-stats")],
        )
        .params(RPC)
        .params(&[OUTPUT])
        .into(),
        CliTool::new(
            "stellar_snapshot_create",
            "Create a ledger snapshot from a history archive",
            &[Word::Lit("snapshot"), Word::Lit("create")],
        )
        .params(&[
            choice("output", &["json"], "Snapshot format"),
            number("ledger", "Ledger sequence to snapshot"),
            list("addresses", "Account or contract addresses to include"),
            list("wasmHashes", "WASM hashes to include"),
            string("out", "Output file"),
            string("archiveUrl", "History archive URL"),
            CONFIG_DIR,
        ])
        .params(RPC)
        .required(&["output"])
        .flags(&[("addresses", "--address"), ("wasmHashes", "--wasm-hash")])
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_repeat_filters_under_cli_names() {
        let Some(ToolHandler::Cli(events)) = tools().into_iter().next() else {
            panic!("events tool missing");
        };
        let (_, argv) = events
            .build(&json!({
                "startLedger": 100,
                "contractIds": ["C1", "C2"],
                "topicFilters": ["AAAA,*"],
                "eventType": "contract"
            }))
            .unwrap();
        assert_eq!(
            argv,
            vec![
                "events", "--start-ledger", "100", "--id", "C1", "--id", "C2", "--topic",
                "AAAA,*", "--type", "contract",
            ]
        );
    }
}
