// src/tools/render.rs

use serde_json::{Map, Value};

use crate::cli::args::Params;
use crate::cli::executor::CliOutput;
use crate::cli::output::{extract_contract_id, extract_transaction_hash, interpret, FormatHint};
use crate::tools::reports;

pub const EMPTY_SUCCESS: &str = "Command executed successfully";

/// Identifier pulled out of human-readable output into its own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    ContractId,
    TransactionHash,
    WasmHash,
}

impl Extract {
    fn field(self) -> &'static str {
        match self {
            Extract::ContractId => "contractId",
            Extract::TransactionHash => "transactionHash",
            Extract::WasmHash => "wasmHash",
        }
    }

    fn find(self, stdout: &str) -> Option<String> {
        match self {
            Extract::ContractId => extract_contract_id(stdout),
            Extract::TransactionHash | Extract::WasmHash => extract_transaction_hash(stdout),
        }
    }
}

/// How the `result` field of a JSON envelope is built from stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultForm {
    Interpreted(FormatHint),
    /// Trimmed stdout as a JSON string. For commands whose whole output is
    /// one identifier, which would otherwise be sniffed as base64 XDR.
    Verbatim,
}

/// How a successful run becomes the text of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Render {
    #[default]
    Text,
    Json {
        operation: &'static str,
        result: ResultForm,
        extract: Option<Extract>,
    },
    Version,
    Completion,
    PluginSearch,
    PluginList,
}

impl Render {
    pub const fn json(operation: &'static str) -> Self {
        Render::Json {
            operation,
            result: ResultForm::Interpreted(FormatHint::Auto),
            extract: None,
        }
    }

    pub const fn json_hinted(operation: &'static str, hint: FormatHint) -> Self {
        Render::Json {
            operation,
            result: ResultForm::Interpreted(hint),
            extract: None,
        }
    }

    pub const fn json_extract(operation: &'static str, extract: Extract) -> Self {
        Render::Json {
            operation,
            result: ResultForm::Interpreted(FormatHint::Auto),
            extract: Some(extract),
        }
    }

    pub const fn json_verbatim(operation: &'static str, extract: Extract) -> Self {
        Render::Json {
            operation,
            result: ResultForm::Verbatim,
            extract: Some(extract),
        }
    }

    pub fn render(&self, params: &Params, output: &CliOutput) -> String {
        let stdout = output.stdout.as_str();
        match *self {
            Render::Text => {
                if stdout.is_empty() {
                    EMPTY_SUCCESS.to_string()
                } else {
                    stdout.to_string()
                }
            }
            Render::Json {
                operation,
                result,
                extract,
            } => {
                let result = match result {
                    _ if params.is_true("buildOnly") => serde_json::json!({ "xdr": stdout }),
                    ResultForm::Interpreted(hint) => interpret(stdout, hint).into_value(),
                    ResultForm::Verbatim => Value::String(stdout.to_string()),
                };

                let mut body = Map::new();
                body.insert("success".into(), Value::Bool(true));
                body.insert("operation".into(), Value::String(operation.to_string()));
                if let Some(extract) = extract {
                    let found = extract.find(stdout).map(Value::String).unwrap_or(Value::Null);
                    body.insert(extract.field().into(), found);
                }
                body.insert("result".into(), result);
                body.insert("raw".into(), Value::String(stdout.to_string()));

                let body = Value::Object(body);
                serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
            }
            Render::Version => reports::version_report(
                stdout,
                params.is_true("onlyVersion"),
                params.is_true("onlyVersionMajor"),
            ),
            Render::Completion => {
                reports::completion_report(params.str("shell").unwrap_or_default(), stdout)
            }
            Render::PluginSearch => reports::plugin_search_report(stdout),
            Render::PluginList => reports::plugin_list_report(stdout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn out(stdout: &str) -> CliOutput {
        CliOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    fn params(value: Value) -> Params {
        Params::from_json(&value).unwrap()
    }

    #[test]
    fn text_falls_back_on_empty_output() {
        assert_eq!(Render::Text.render(&Params::default(), &out("")), EMPTY_SUCCESS);
        assert_eq!(Render::Text.render(&Params::default(), &out("alice")), "alice");
    }

    #[test]
    fn json_envelope_with_contract_id() {
        let id = "CA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQGAXE";
        let text = Render::json_extract("deploy", Extract::ContractId)
            .render(&Params::default(), &out(id));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["operation"], "deploy");
        assert_eq!(body["contractId"], id);
        assert_eq!(body["raw"], id);
    }

    #[test]
    fn build_only_result_is_raw_xdr() {
        let text = Render::json("payment")
            .render(&params(json!({"buildOnly": true})), &out("{\"not\": \"parsed\"}"));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["result"], json!({"xdr": "{\"not\": \"parsed\"}"}));
    }

    #[test]
    fn json_hint_parses_structured_output() {
        let text = Render::json_hinted("simulate", FormatHint::Json)
            .render(&Params::default(), &out("{\"cost\": 12}"));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["result"], json!({"cost": 12}));
    }

    #[test]
    fn simulate_output_in_xdr_is_wrapped() {
        let text = Render::json_hinted("simulate", FormatHint::Json)
            .render(&Params::default(), &out("AAAAAgAAAAB+/w=="));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["result"], json!({"xdr": "AAAAAgAAAAB+/w=="}));
    }

    #[test]
    fn verbatim_result_keeps_identifier_as_string() {
        let hash = "3389e9f0f1a65f19736cacf544c2e825313e8447f569233bb8db39aa607c8889";
        let text = Render::json_verbatim("hash", Extract::TransactionHash)
            .render(&Params::default(), &out(hash));
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["result"], json!(hash));
        assert_eq!(body["transactionHash"], json!(hash));
    }
}
