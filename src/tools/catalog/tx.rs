// src/tools/catalog/tx.rs

use crate::cli::args::{Params, Word};
use crate::cli::error::ArgError;
use crate::cli::output::FormatHint;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{
    boolean, choice, list, number, string, Param, NETWORK, RPC, SOURCE_ACCOUNT, TX_OPTIONS,
};
use crate::tools::registry::ToolHandler;
use crate::tools::render::{Extract, Render};

const TX_XDR: Param = string("txXdr", "Transaction envelope XDR (base64)");
const DESTINATION: Param = string("destination", "Account that receives the funds");
const ASSET_HINT: &str = "Asset (native or CODE:ISSUER)";

const STRICT_MODES: &[(&str, &str)] = &[
    ("send", "path-payment-strict-send"),
    ("receive", "path-payment-strict-receive"),
];

/// Strict send fixes the sent amount; strict receive fixes the received one.
fn check_path_payment(params: &Params) -> Result<(), ArgError> {
    let needed: &[&str] = match params.str("strictMode") {
        Some("send") => &["sendAmount", "destMin"],
        Some("receive") => &["sendMax", "destAmount"],
        _ => &[],
    };
    match needed.iter().find(|key| !params.contains(key)) {
        Some(key) => Err(ArgError::InvalidValue {
            key: key.to_string(),
            reason: format!(
                "required for strict {}",
                params.str("strictMode").unwrap_or_default()
            ),
        }),
        None => Ok(()),
    }
}

/// A `tx new <operation>` tool with the shared transaction options.
fn tx_new(
    name: &'static str,
    description: &'static str,
    words: &'static [Word<'static>],
    operation: &'static str,
    action: &'static str,
) -> CliTool {
    CliTool::new(name, description, words)
        .render(Render::json(operation))
        .action(action)
}

pub fn tools() -> Vec<ToolHandler> {
    vec![
        tx_new(
            "stellar_tx_payment",
            "Send a payment",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("payment")],
            "payment",
            "creating payment",
        )
        .params(&[
            DESTINATION,
            string("asset", ASSET_HINT),
            string("amount", "Amount to send (e.g. \"10.5\")"),
            string("memo", "Transaction memo"),
            choice("memoType", &["text", "id", "hash", "return"], "Type of memo"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "destination", "asset", "amount", "network"])
        .into(),
        tx_new(
            "stellar_tx_create_account",
            "Create and fund a new account",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("create-account")],
            "create_account",
            "creating account",
        )
        .params(&[
            string("destination", "Public key of the account to create"),
            string("startingBalance", "Initial XLM balance"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "destination", "startingBalance", "network"])
        .into(),
        tx_new(
            "stellar_tx_change_trust",
            "Create, update, or remove a trustline",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("change-trust")],
            "change_trust",
            "changing trust",
        )
        .params(&[
            string("line", "Asset to trust (CODE:ISSUER)"),
            string("limit", "Trust limit (0 removes the trustline)"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "line", "network"])
        .into(),
        tx_new(
            "stellar_tx_account_merge",
            "Merge the source account into another account",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("account-merge")],
            "account_merge",
            "merging account",
        )
        .params(&[string("accountDestination", "Account that receives the balance")])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "accountDestination", "network"])
        .into(),
        tx_new(
            "stellar_tx_manage_data",
            "Set, modify, or delete an account data entry",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("manage-data")],
            "manage_data",
            "managing data",
        )
        .params(&[
            string("dataName", "Name of the data entry"),
            string("dataValue", "Value to set (omit to delete the entry)"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "dataName", "network"])
        .into(),
        tx_new(
            "stellar_tx_set_options",
            "Set account options: thresholds, signers, flags, home domain",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("set-options")],
            "set_options",
            "setting options",
        )
        .params(&[
            string("inflationDest", "Inflation destination account"),
            number("clearFlags", "Flags to clear"),
            number("setFlags", "Flags to set"),
            number("masterWeight", "Master key weight"),
            number("lowThreshold", "Low threshold"),
            number("medThreshold", "Medium threshold"),
            number("highThreshold", "High threshold"),
            string("homeDomain", "Home domain"),
            string("signerKey", "Public key of the signer to add or update"),
            number("signerWeight", "Signer weight (0 removes the signer)"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "network"])
        .into(),
        tx_new(
            "stellar_tx_manage_sell_offer",
            "Create, update, or delete a sell offer",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("manage-sell-offer")],
            "manage_sell_offer",
            "managing sell offer",
        )
        .params(&[
            string("selling", ASSET_HINT),
            string("buying", ASSET_HINT),
            string("amount", "Amount to sell"),
            string("price", "Price per unit (buying/selling)"),
            string("offerId", "Offer to update or delete (0 for a new offer)"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "selling", "buying", "amount", "price", "network"])
        .into(),
        tx_new(
            "stellar_tx_manage_buy_offer",
            "Create, update, or delete a buy offer",
            &[Word::Lit("tx"), Word::Lit("new"), Word::Lit("manage-buy-offer")],
            "manage_buy_offer",
            "managing buy offer",
        )
        .params(&[
            string("selling", ASSET_HINT),
            string("buying", ASSET_HINT),
            string("buyAmount", "Amount to buy"),
            string("price", "Price per unit (buying/selling)"),
            string("offerId", "Offer to update or delete (0 for a new offer)"),
        ])
        .params(TX_OPTIONS)
        .required(&["sourceAccount", "selling", "buying", "buyAmount", "price", "network"])
        .into(),
        tx_new(
            "stellar_tx_path_payment",
            "Send a path payment (strict send or strict receive)",
            &[
                Word::Lit("tx"),
                Word::Lit("new"),
                Word::Choice("strictMode", STRICT_MODES),
            ],
            "path_payment",
            "creating path payment",
        )
        .params(&[
            DESTINATION,
            string("sendAsset", ASSET_HINT),
            string("sendAmount", "Amount to send (strict send)"),
            string("sendMax", "Maximum amount to send (strict receive)"),
            string("destAsset", ASSET_HINT),
            string("destAmount", "Amount to receive (strict receive)"),
            string("destMin", "Minimum amount to receive (strict send)"),
            choice("strictMode", &["send", "receive"], "Strict send or strict receive"),
            list("path", "Intermediate assets"),
        ])
        .params(TX_OPTIONS)
        .required(&[
            "sourceAccount",
            "destination",
            "sendAsset",
            "destAsset",
            "strictMode",
            "network",
        ])
        .check(check_path_payment)
        .into(),
        CliTool::new(
            "stellar_tx_sign",
            "Sign a transaction envelope",
            &[Word::Lit("tx"), Word::Lit("sign"), Word::Slot("txXdr")],
        )
        .params(&[
            TX_XDR,
            string("signWithKey", "Key to sign with (identity, secret key, or seed phrase)"),
            string("hdPath", "HD path when signing with a seed phrase"),
            boolean("signWithLab", "Sign with Stellar Lab"),
            boolean("signWithLedger", "Sign with a Ledger device"),
            NETWORK,
        ])
        .required(&["txXdr"])
        .render(Render::json_hinted("sign", FormatHint::Xdr))
        .action("signing transaction")
        .into(),
        CliTool::new(
            "stellar_tx_send",
            "Submit a signed transaction envelope",
            &[Word::Lit("tx"), Word::Lit("send"), Word::Slot("txXdr")],
        )
        .params(&[TX_XDR, NETWORK])
        .params(RPC)
        .required(&["txXdr", "network"])
        .render(Render::json_extract("send", Extract::TransactionHash))
        .action("sending transaction")
        .into(),
        CliTool::new(
            "stellar_tx_simulate",
            "Simulate a transaction envelope",
            &[Word::Lit("tx"), Word::Lit("simulate"), Word::Slot("txXdr")],
        )
        .params(&[
            TX_XDR,
            NETWORK,
            string("rpcUrl", "RPC server endpoint"),
            string("sourceAccount", "Source account for the simulation context"),
        ])
        .required(&["txXdr", "network"])
        .render(Render::json_hinted("simulate", FormatHint::Json))
        .action("simulating transaction")
        .into(),
        CliTool::new(
            "stellar_tx_hash",
            "Compute the hash of a transaction envelope",
            &[Word::Lit("tx"), Word::Lit("hash"), Word::Slot("txXdr")],
        )
        .params(&[TX_XDR, NETWORK])
        .required(&["txXdr"])
        .render(Render::json_verbatim("hash", Extract::TransactionHash))
        .action("hashing transaction")
        .into(),
        CliTool::new(
            "stellar_tx_decode",
            "Decode a transaction envelope to JSON",
            &[Word::Lit("tx"), Word::Lit("decode"), Word::Slot("txXdr")],
        )
        .params(&[
            TX_XDR,
            choice("outputFormat", &["json", "json-formatted"], "Output format"),
        ])
        .required(&["txXdr"])
        .render(Render::json_hinted("decode", FormatHint::Json))
        .action("decoding transaction")
        .into(),
        CliTool::new(
            "stellar_tx_fetch",
            "Fetch a transaction from the network by hash",
            &[Word::Lit("tx"), Word::Lit("fetch"), Word::Slot("txHash")],
        )
        .params(&[
            string("txHash", "Transaction hash"),
            NETWORK,
            string("rpcUrl", "RPC server endpoint"),
        ])
        .required(&["txHash", "network"])
        .render(Render::json_hinted("fetch", FormatHint::Json))
        .action("fetching transaction")
        .into(),
        CliTool::new(
            "stellar_tx_update_sequence",
            "Set the sequence number of a transaction envelope",
            &[
                Word::Lit("tx"),
                Word::Lit("update"),
                Word::Lit("sequence-number"),
                Word::Slot("sequenceNumber"),
                Word::Slot("txXdr"),
            ],
        )
        .params(&[
            TX_XDR,
            string("sequenceNumber", "New sequence number, or \"next\""),
            SOURCE_ACCOUNT,
            NETWORK,
        ])
        .required(&["txXdr"])
        .render(Render::json_hinted("update_sequence", FormatHint::Xdr))
        .action("updating sequence")
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn argv(name: &str, arguments: Value) -> Result<Vec<String>, ArgError> {
        match tools().into_iter().find(|t| t.name() == name) {
            Some(ToolHandler::Cli(cli)) => cli.build(&arguments).map(|(_, argv)| argv),
            _ => panic!("no cli tool {}", name),
        }
    }

    #[test]
    fn path_payment_maps_mode_to_subcommand() {
        let argv = argv(
            "stellar_tx_path_payment",
            json!({
                "strict_mode": "send",
                "source_account": "alice",
                "destination": "GDEST",
                "send_asset": "native",
                "send_amount": "10",
                "dest_asset": "USDC:GISSUER",
                "dest_min": "9",
                "path": ["EURT:GA", "native"],
                "network": "testnet"
            }),
        )
        .unwrap();
        assert_eq!(
            argv,
            vec![
                "tx", "new", "path-payment-strict-send", "--source-account", "alice",
                "--destination", "GDEST", "--send-asset", "native", "--send-amount", "10",
                "--dest-asset", "USDC:GISSUER", "--dest-min", "9", "--path", "EURT:GA",
                "--path", "native", "--network", "testnet",
            ]
        );
    }

    #[test]
    fn path_payment_checks_mode_specific_amounts() {
        let err = argv(
            "stellar_tx_path_payment",
            json!({
                "strictMode": "receive", "sourceAccount": "a", "destination": "d",
                "sendAsset": "native", "destAsset": "native", "network": "testnet",
                "sendMax": "5"
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ArgError::InvalidValue { ref key, .. } if key == "destAmount"));

        let err = argv(
            "stellar_tx_path_payment",
            json!({
                "strictMode": "sideways", "sourceAccount": "a", "destination": "d",
                "sendAsset": "native", "destAsset": "native", "network": "testnet"
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ArgError::InvalidValue { ref key, .. } if key == "strictMode"));
    }

    #[test]
    fn set_options_renames_signer() {
        let argv = argv(
            "stellar_tx_set_options",
            json!({"sourceAccount": "a", "network": "testnet", "signerKey": "GS", "signerWeight": 1}),
        )
        .unwrap();
        assert_eq!(
            &argv[3..],
            ["--source-account", "a", "--network", "testnet", "--signer", "GS", "--signer-weight", "1"]
        );
    }

    #[test]
    fn send_takes_envelope_positionally() {
        assert_eq!(
            argv("stellar_tx_send", json!({"txXdr": "AAAA+/==", "network": "testnet"})).unwrap(),
            vec!["tx", "send", "AAAA+/==", "--network", "testnet"]
        );
    }
}
