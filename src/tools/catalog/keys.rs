// src/tools/catalog/keys.rs

use crate::cli::args::Word;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{boolean, string, Param, CONFIG_DIR, RPC};
use crate::tools::registry::ToolHandler;

const NAME: Param = string("name", "Identity name");
const HD_PATH: Param = string("hdPath", "HD derivation path");

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_keys_generate",
            "Generate a new identity from a 24-word seed phrase",
            &[Word::Lit("keys"), Word::Lit("generate"), Word::Slot("name")],
        )
        .params(&[
            NAME,
            string("seed", "Optional seed for deterministic generation"),
            boolean("asSecret", "Store the secret key instead of the seed phrase"),
            boolean("secureStore", "Save the key in the OS secure store"),
            HD_PATH,
            boolean("fund", "Fund the new account with friendbot"),
            boolean("overwrite", "Overwrite an existing identity"),
        ])
        .params(RPC)
        .params(&[CONFIG_DIR])
        .required(&["name"])
        .into(),
        CliTool::new(
            "stellar_keys_add",
            "Add an existing identity",
            &[Word::Lit("keys"), Word::Lit("add"), Word::Slot("name")],
        )
        .params(&[
            NAME,
            boolean("secretKey", "Read a secret key from stdin"),
            boolean("seedPhrase", "Read a seed phrase from stdin"),
            boolean("secureStore", "Save the key in the OS secure store"),
            string("publicKey", "Add a public key only (no signing)"),
            CONFIG_DIR,
        ])
        .required(&["name"])
        .into(),
        CliTool::new(
            "stellar_keys_public_key",
            "Print the public key of an identity",
            &[Word::Lit("keys"), Word::Lit("public-key"), Word::Slot("name")],
        )
        .params(&[NAME, HD_PATH, CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_keys_fund",
            "Fund an identity on a test network",
            &[Word::Lit("keys"), Word::Lit("fund"), Word::Slot("name")],
        )
        .params(&[NAME])
        .params(RPC)
        .params(&[HD_PATH, CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_keys_list",
            "List identities",
            &[Word::Lit("keys"), Word::Lit("ls")],
        )
        .params(&[boolean("long", "Show more detail"), CONFIG_DIR])
        .into(),
        CliTool::new(
            "stellar_keys_remove",
            "Remove an identity",
            &[Word::Lit("keys"), Word::Lit("rm"), Word::Slot("name")],
        )
        .params(&[NAME, CONFIG_DIR])
        .required(&["name"])
        .into(),
        CliTool::new(
            "stellar_keys_secret",
            "Print the secret key of an identity",
            &[Word::Lit("keys"), Word::Lit("secret"), Word::Slot("name")],
        )
        .params(&[
            NAME,
            boolean("phrase", "Print the seed phrase instead"),
            HD_PATH,
            CONFIG_DIR,
        ])
        .into(),
        CliTool::new(
            "stellar_keys_use",
            "Set the default identity",
            &[Word::Lit("keys"), Word::Lit("use"), Word::Slot("name")],
        )
        .params(&[NAME, CONFIG_DIR])
        .required(&["name"])
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fund_passes_rpc_headers_with_colon() {
        let Some(ToolHandler::Cli(fund)) = tools().into_iter().find(|t| t.name() == "stellar_keys_fund")
        else {
            panic!("stellar_keys_fund missing");
        };
        let (_, argv) = fund
            .build(&json!({"name": "alice", "rpcHeaders": {"X-Key": "k"}, "network": "testnet"}))
            .unwrap();
        assert_eq!(
            argv,
            vec!["keys", "fund", "alice", "--rpc-header", "X-Key:k", "--network", "testnet"]
        );
    }
}
