// src/tools/catalog/contract.rs

use crate::cli::args::{ParamValue, Params, Trailing, Word};
use crate::cli::error::ArgError;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{
    boolean, choice, list, map, number, string, Param, BUILD_ONLY, DURABILITY, FEE, NETWORK,
    SOURCE_ACCOUNT,
};
use crate::tools::registry::ToolHandler;
use crate::tools::render::{Extract, Render};

const CONTRACT_ID: Param = string("contractId", "Contract ID or alias");
const WASM: Param = string("wasm", "Path to a local WASM file");
const WASM_HASH: Param = string("wasmHash", "Hash of WASM already installed on the network");
const KEY: Param = string("key", "Storage key (symbols only)");
const KEY_XDR: Param = string("keyXdr", "Storage key as base64-encoded XDR");
const TTL_LEDGER_ONLY: Param = boolean("ttlLedgerOnly", "Only print the new TTL ledger");

const ENTRY: &[Param] = &[
    CONTRACT_ID,
    KEY,
    KEY_XDR,
    choice("durability", DURABILITY, "Storage durability type"),
];

const INFO_SOURCES: &[&str] = &["wasm", "wasmHash", "contractId"];

/// `contract alias add` needs a contract; `show` and `remove` need the alias.
fn check_alias(params: &Params) -> Result<(), ArgError> {
    match params.str("action") {
        Some("add") => {
            if !params.contains("alias") {
                return Err(ArgError::InvalidValue {
                    key: "alias".into(),
                    reason: "required for add".into(),
                });
            }
            if !params.contains("contractId") {
                return Err(ArgError::InvalidValue {
                    key: "contractId".into(),
                    reason: "required for add".into(),
                });
            }
            Ok(())
        }
        Some(action @ ("show" | "remove")) if !params.contains("alias") => {
            Err(ArgError::InvalidValue {
                key: "alias".into(),
                reason: format!("required for {}", action),
            })
        }
        _ => Ok(()),
    }
}

/// Asset IDs need the asset; WASM IDs need a salt and a deployer.
fn check_id(params: &Params) -> Result<(), ArgError> {
    let needed: &[&str] = match params.str("idType") {
        Some("asset") => &["asset"],
        Some("wasm") => &["salt", "sourceAccount"],
        _ => &[],
    };
    for key in needed {
        if !params.contains(key) {
            return Err(ArgError::InvalidValue {
                key: key.to_string(),
                reason: format!(
                    "required when idType is {}",
                    params.str("idType").unwrap_or_default()
                ),
            });
        }
    }
    Ok(())
}

/// Arguments for the invoked function must be a key/value object.
fn check_function_args(params: &Params) -> Result<(), ArgError> {
    match params.get("functionArgs") {
        None | Some(ParamValue::Pairs(_)) => Ok(()),
        Some(_) => Err(ArgError::InvalidValue {
            key: "functionArgs".into(),
            reason: "expected an object of named arguments".into(),
        }),
    }
}

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_contract_deploy",
            "Deploy a WASM contract to the Stellar network",
            &[Word::Lit("contract"), Word::Lit("deploy")],
        )
        .params(&[
            string("wasmPath", "Path to WASM file to deploy"),
            WASM_HASH,
            SOURCE_ACCOUNT,
            NETWORK,
            string("salt", "Custom 32-byte salt for contract ID generation"),
            string("alias", "Alias to save for the deployed contract ID"),
            list("constructorArgs", "Arguments passed to the contract constructor"),
            FEE,
            BUILD_ONLY,
            boolean("ignoreChecks", "Ignore safety checks when deploying"),
        ])
        .required(&["sourceAccount", "network"])
        .one_of(&["wasmPath", "wasmHash"])
        .trailing(Trailing::Words("constructorArgs"))
        .render(Render::json_extract("deploy", Extract::ContractId))
        .action("deploying contract")
        .into(),
        CliTool::new(
            "stellar_contract_invoke",
            "Invoke a function on a deployed contract",
            &[Word::Lit("contract"), Word::Lit("invoke")],
        )
        .params(&[
            CONTRACT_ID,
            SOURCE_ACCOUNT,
            NETWORK,
            string("functionName", "Name of the contract function to invoke"),
            map("functionArgs", "Arguments to pass to the function as key-value pairs"),
            choice(
                "send",
                &["default", "no", "yes"],
                "Sending behavior: default (auto), no (simulate only), yes (always send)",
            ),
            FEE,
            BUILD_ONLY,
        ])
        .required(&["contractId", "sourceAccount", "network", "functionName"])
        .trailing(Trailing::Call {
            function: "functionName",
            args: "functionArgs",
        })
        .check(check_function_args)
        .render(Render::json("invoke"))
        .action("invoking contract")
        .into(),
        CliTool::new(
            "stellar_contract_build",
            "Build a contract from source",
            &[Word::Lit("contract"), Word::Lit("build")],
        )
        .params(&[
            string("manifestPath", "Path to Cargo.toml"),
            string("package", "Package to build in a workspace"),
            string("profile", "Build profile (default: release)"),
            list("features", "Features to activate"),
            boolean("allFeatures", "Build with all features activated"),
            boolean("noDefaultFeatures", "Build without default features"),
            string("outDir", "Directory to copy built WASM files to"),
            boolean("printCommandsOnly", "Only print the build commands"),
            map("meta", "Key-value pairs added to contract metadata"),
        ])
        .action("building contract")
        .into(),
        CliTool::new(
            "stellar_contract_init",
            "Initialize a new Soroban contract project",
            &[Word::Lit("contract"), Word::Lit("init"), Word::Slot("projectPath")],
        )
        .params(&[
            string("projectPath", "Path where the project will be created"),
            string("name", "Name of the contract (default: hello-world)"),
            boolean("overwrite", "Overwrite existing files"),
        ])
        .required(&["projectPath"])
        .action("initializing contract")
        .into(),
        CliTool::new(
            "stellar_contract_optimize",
            "Optimize WASM files for size",
            &[Word::Lit("contract"), Word::Lit("optimize")],
        )
        .params(&[
            list("wasmPaths", "Paths to WASM files to optimize"),
            string("wasmOut", "Output path for the optimized WASM"),
        ])
        .required(&["wasmPaths"])
        .flags(&[("wasmPaths", "--wasm")])
        .action("optimizing contract")
        .into(),
        CliTool::new(
            "stellar_contract_alias",
            "Manage contract aliases (add, remove, show, list)",
            &[
                Word::Lit("contract"),
                Word::Lit("alias"),
                Word::Slot("action"),
                Word::Slot("alias"),
            ],
        )
        .params(&[
            choice("action", &["add", "remove", "show", "list"], "Alias action to perform"),
            string("alias", "Alias name (required for add, remove, show)"),
            string("contractId", "Contract ID to associate with the alias (required for add)"),
            boolean("overwrite", "Overwrite an existing alias"),
            NETWORK,
        ])
        .required(&["action"])
        .check(check_alias)
        .action("managing alias")
        .into(),
        CliTool::new(
            "stellar_contract_asset_deploy",
            "Deploy the built-in Stellar Asset Contract for an asset",
            &[Word::Lit("contract"), Word::Lit("asset"), Word::Lit("deploy")],
        )
        .params(&[
            string("asset", "Asset to wrap (e.g. \"USDC:GABC...XYZ\")"),
            SOURCE_ACCOUNT,
            NETWORK,
            string("alias", "Alias to save for the asset contract"),
            FEE,
            BUILD_ONLY,
        ])
        .required(&["asset", "sourceAccount", "network"])
        .render(Render::json_extract("asset_deploy", Extract::ContractId))
        .action("deploying asset contract")
        .into(),
        CliTool::new(
            "stellar_contract_bindings",
            "Generate client bindings for a contract",
            &[Word::Lit("contract"), Word::Lit("bindings"), Word::Slot("language")],
        )
        .params(&[
            choice(
                "language",
                &["json", "rust", "typescript", "python", "java", "flutter", "swift", "php"],
                "Target language for bindings",
            ),
            WASM,
            WASM_HASH,
            CONTRACT_ID,
            string("outputDir", "Directory for the generated bindings"),
            boolean("overwrite", "Overwrite an existing output directory"),
            NETWORK,
        ])
        .required(&["language"])
        .one_of(INFO_SOURCES)
        .flags(&[("contractId", "--contract-id")])
        .action("generating bindings")
        .into(),
        CliTool::new(
            "stellar_contract_info",
            "Show a contract's interface, metadata, environment metadata, or build info",
            &[Word::Lit("contract"), Word::Lit("info"), Word::Slot("infoType")],
        )
        .params(&[
            choice(
                "infoType",
                &["interface", "meta", "env-meta", "build"],
                "Type of information to retrieve",
            ),
            WASM,
            WASM_HASH,
            CONTRACT_ID,
            choice(
                "output",
                &["rust", "xdr-base64", "json", "json-formatted", "text"],
                "Output format",
            ),
            NETWORK,
        ])
        .required(&["infoType"])
        .one_of(INFO_SOURCES)
        .flags(&[("contractId", "--contract-id")])
        .action("getting contract info")
        .into(),
        CliTool::new(
            "stellar_contract_extend",
            "Extend the time to live of contract data entries",
            &[Word::Lit("contract"), Word::Lit("extend")],
        )
        .params(&[number("ledgersToExtend", "Number of ledgers to extend the TTL by")])
        .params(&[SOURCE_ACCOUNT, NETWORK])
        .params(ENTRY)
        .params(&[TTL_LEDGER_ONLY, FEE, BUILD_ONLY])
        .required(&["ledgersToExtend", "sourceAccount", "network"])
        .render(Render::json("extend"))
        .action("extending contract data")
        .into(),
        CliTool::new(
            "stellar_contract_restore",
            "Restore archived contract data entries",
            &[Word::Lit("contract"), Word::Lit("restore")],
        )
        .params(&[SOURCE_ACCOUNT, NETWORK])
        .params(ENTRY)
        .params(&[
            number("ledgersToExtend", "Number of ledgers to extend after restoration"),
            TTL_LEDGER_ONLY,
            FEE,
            BUILD_ONLY,
        ])
        .required(&["sourceAccount", "network"])
        .render(Render::json("restore"))
        .action("restoring contract data")
        .into(),
        CliTool::new(
            "stellar_contract_read",
            "Print the current value of contract data entries",
            &[Word::Lit("contract"), Word::Lit("read")],
        )
        .params(ENTRY)
        .params(&[
            choice("output", &["string", "json", "xdr"], "Output format"),
            NETWORK,
        ])
        .required(&["network"])
        .render(Render::json("read"))
        .action("reading contract data")
        .into(),
        CliTool::new(
            "stellar_contract_fetch",
            "Fetch a contract's WASM binary",
            &[Word::Lit("contract"), Word::Lit("fetch")],
        )
        .params(&[
            CONTRACT_ID,
            string("outFile", "Where to write the fetched WASM"),
            NETWORK,
        ])
        .required(&["contractId", "network"])
        .action("fetching contract")
        .into(),
        CliTool::new(
            "stellar_contract_upload",
            "Install a WASM binary on the network",
            &[Word::Lit("contract"), Word::Lit("upload")],
        )
        .params(&[
            SOURCE_ACCOUNT,
            string("wasm", "Path to the WASM file to upload"),
            NETWORK,
            boolean("ignoreChecks", "Ignore safety checks"),
            FEE,
            BUILD_ONLY,
        ])
        .required(&["sourceAccount", "wasm", "network"])
        .render(Render::json_extract("upload", Extract::WasmHash))
        .action("uploading contract")
        .into(),
        CliTool::new(
            "stellar_contract_id",
            "Compute the contract ID for an asset or a WASM deployment",
            &[Word::Lit("contract"), Word::Lit("id"), Word::Slot("idType")],
        )
        .params(&[
            choice("idType", &["asset", "wasm"], "Type of contract ID to generate"),
            string("asset", "Asset (required when idType is asset)"),
            string("salt", "Salt (required when idType is wasm)"),
            string("sourceAccount", "Deployer account (required when idType is wasm)"),
            NETWORK,
        ])
        .required(&["idType", "network"])
        .check(check_id)
        .render(Render::json_verbatim("id", Extract::ContractId))
        .action("computing contract id")
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn argv(name: &str, arguments: Value) -> Result<Vec<String>, ArgError> {
        let tool = tools()
            .into_iter()
            .find(|t| t.name() == name)
            .unwrap();
        match tool {
            ToolHandler::Cli(cli) => cli.build(&arguments).map(|(_, argv)| argv),
            ToolHandler::Rpc(_) => unreachable!(),
        }
    }

    #[test]
    fn deploy_requires_a_wasm_source() {
        let err = argv(
            "stellar_contract_deploy",
            json!({"source_account": "alice", "network": "testnet"}),
        )
        .unwrap_err();
        assert!(matches!(err, ArgError::MissingAlternative(_)));
    }

    #[test]
    fn deploy_appends_constructor_args_last() {
        let argv = argv(
            "stellar_contract_deploy",
            json!({
                "wasm_path": "hello.wasm",
                "source_account": "alice",
                "network": "testnet",
                "constructor_args": ["--admin", "alice"],
                "alias": "hello"
            }),
        )
        .unwrap();
        assert_eq!(
            argv,
            vec![
                "contract", "deploy", "--wasm", "hello.wasm", "--source-account", "alice",
                "--network", "testnet", "--alias", "hello", "--", "--admin", "alice",
            ]
        );
    }

    #[test]
    fn invoke_emits_function_region() {
        let argv = argv(
            "stellar_contract_invoke",
            json!({
                "contractId": "CXYZ",
                "sourceAccount": "alice",
                "network": "testnet",
                "functionName": "hello",
                "functionArgs": {"to": "world"}
            }),
        )
        .unwrap();
        assert_eq!(
            argv,
            vec![
                "contract", "invoke", "--id", "CXYZ", "--source-account", "alice", "--network",
                "testnet", "--", "hello", "--to", "world",
            ]
        );
    }

    #[test]
    fn invoke_rejects_positional_function_args() {
        let err = argv(
            "stellar_contract_invoke",
            json!({
                "contractId": "C", "sourceAccount": "a", "network": "testnet",
                "functionName": "f", "functionArgs": ["x"]
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ArgError::InvalidValue { .. }));
    }

    #[test]
    fn alias_rules_depend_on_action() {
        assert!(argv("stellar_contract_alias", json!({"action": "add", "alias": "a"})).is_err());
        assert!(argv("stellar_contract_alias", json!({"action": "show"})).is_err());
        assert_eq!(
            argv("stellar_contract_alias", json!({"action": "list"})).unwrap(),
            vec!["contract", "alias", "list"]
        );
        assert_eq!(
            argv(
                "stellar_contract_alias",
                json!({"action": "add", "alias": "hello", "contractId": "CXYZ", "overwrite": true})
            )
            .unwrap(),
            vec!["contract", "alias", "add", "hello", "--id", "CXYZ", "--overwrite"]
        );
    }

    #[test]
    fn optimize_and_bindings_use_renamed_flags() {
        assert_eq!(
            argv("stellar_contract_optimize", json!({"wasmPaths": ["a.wasm", "b.wasm"]})).unwrap(),
            vec!["contract", "optimize", "--wasm", "a.wasm", "--wasm", "b.wasm"]
        );
        assert_eq!(
            argv(
                "stellar_contract_bindings",
                json!({"language": "typescript", "contractId": "CXYZ", "network": "testnet"})
            )
            .unwrap(),
            vec!["contract", "bindings", "typescript", "--contract-id", "CXYZ", "--network", "testnet"]
        );
    }

    #[test]
    fn wasm_contract_id_needs_salt() {
        let err = argv(
            "stellar_contract_id",
            json!({"idType": "wasm", "network": "testnet", "sourceAccount": "alice"}),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ArgError::InvalidValue {
                key: "salt".into(),
                reason: "required when idType is wasm".into()
            }
        );
    }
}
