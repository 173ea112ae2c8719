// src/tools/catalog/xdr.rs

use crate::cli::args::Word;
use crate::tools::cli_tool::CliTool;
use crate::tools::params::{choice, list, number, string, Param};
use crate::tools::registry::ToolHandler;

const CHANNEL: Param = choice("channel", &["+curr", "+next"], "XDR specification channel");
const BINARY_FORMATS: &[&str] = &["single", "single-base64", "stream", "stream-base64", "stream-framed"];

pub fn tools() -> Vec<ToolHandler> {
    vec![
        CliTool::new(
            "stellar_xdr_decode",
            "Decode XDR to JSON",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("decode"),
                Word::Slot("input"),
            ],
        )
        .params(&[
            string("type", "XDR type to decode (e.g. TransactionEnvelope)"),
            list("input", "XDR values to decode (base64)"),
            choice("inputFormat", BINARY_FORMATS, "Input format"),
            choice(
                "outputFormat",
                &["json", "json-formatted", "text", "rust-debug", "rust-debug-formatted"],
                "Output format",
            ),
            CHANNEL,
        ])
        .required(&["type"])
        .into(),
        CliTool::new(
            "stellar_xdr_encode",
            "Encode JSON to XDR",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("encode"),
                Word::Slot("input"),
            ],
        )
        .params(&[
            string("type", "XDR type to encode to"),
            list("input", "JSON values to encode"),
            choice("inputFormat", &["json"], "Input format"),
            choice("outputFormat", &["single", "single-base64", "stream"], "Output format"),
            CHANNEL,
        ])
        .required(&["type"])
        .into(),
        CliTool::new(
            "stellar_xdr_guess",
            "Guess which XDR types a value could be",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("guess"),
                Word::Slot("input"),
            ],
        )
        .params(&[
            string("input", "XDR value to analyze"),
            choice("inputFormat", BINARY_FORMATS, "Input format"),
            number("certainty", "Certainty threshold"),
            CHANNEL,
        ])
        .into(),
        CliTool::new(
            "stellar_xdr_types_list",
            "List XDR types",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("types"),
                Word::Lit("list"),
            ],
        )
        .params(&[
            choice("output", &["plain", "json", "json-formatted"], "Output format"),
            CHANNEL,
        ])
        .into(),
        CliTool::new(
            "stellar_xdr_types_schema",
            "Print the JSON schema of an XDR type",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("types"),
                Word::Lit("schema"),
            ],
        )
        .params(&[
            string("type", "XDR type"),
            choice("output", &["json-schema-draft201909"], "Output format"),
            CHANNEL,
        ])
        .required(&["type"])
        .into(),
        CliTool::new(
            "stellar_xdr_compare",
            "Compare two XDR values of the same type",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("compare"),
                Word::Slot("left"),
                Word::Slot("right"),
            ],
        )
        .params(&[
            string("type", "XDR type of both inputs"),
            string("left", "Left value"),
            string("right", "Right value"),
            choice("inputFormat", &["single-base64"], "Input format"),
            CHANNEL,
        ])
        .required(&["type", "left", "right"])
        .into(),
        CliTool::new(
            "stellar_xdr_generate_default",
            "Generate the default value of an XDR type",
            &[
                Word::Lit("xdr"),
                Word::Slot("channel"),
                Word::Lit("generate"),
                Word::Lit("default"),
            ],
        )
        .params(&[
            string("type", "XDR type to generate"),
            choice(
                "outputFormat",
                &["single", "single-base64", "json", "json-formatted", "text"],
                "Output format",
            ),
            CHANNEL,
        ])
        .required(&["type"])
        .into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn channel_precedes_the_subcommand() {
        let Some(ToolHandler::Cli(decode)) = tools().into_iter().next() else {
            panic!("decode tool missing");
        };
        let (_, argv) = decode
            .build(&json!({
                "type": "TransactionEnvelope",
                "input": ["AAAA"],
                "channel": "+next",
                "outputFormat": "json"
            }))
            .unwrap();
        assert_eq!(
            argv,
            vec!["xdr", "+next", "decode", "AAAA", "--type", "TransactionEnvelope", "--output", "json"]
        );
    }
}
