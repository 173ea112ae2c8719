// src/cli/output.rs
//! Interpretation of CLI stdout: JSON, base64 XDR, or plain text, plus
//! extraction of contract IDs and transaction hashes from human output.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

lazy_static! {
    static ref BASE64: Regex = Regex::new(r"^[A-Za-z0-9+/]+=*$").unwrap();
    static ref CONTRACT_ID_PATTERNS: [Regex; 3] = [
        Regex::new(r"(?i:contract id):\s*([A-Z0-9]{56})").unwrap(),
        Regex::new(r"(?i:id):\s*([A-Z0-9]{56})").unwrap(),
        Regex::new(r"([A-Z0-9]{56})").unwrap(),
    ];
    static ref TX_HASH_PATTERNS: [Regex; 3] = [
        Regex::new(r"(?i:transaction hash):\s*([a-f0-9]{64})").unwrap(),
        Regex::new(r"(?i:hash):\s*([a-f0-9]{64})").unwrap(),
        Regex::new(r"([a-f0-9]{64})").unwrap(),
    ];
}

/// What the caller expects stdout to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint {
    #[default]
    Auto,
    Json,
    Xdr,
}

/// Interpreted stdout. Serializes to the bare JSON value, `{"xdr": ...}`, or
/// a JSON string respectively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Interpreted {
    Json(Value),
    Xdr { xdr: String },
    Text(String),
}

impl Interpreted {
    pub fn into_value(self) -> Value {
        match self {
            Interpreted::Json(v) => v,
            Interpreted::Xdr { xdr } => serde_json::json!({ "xdr": xdr }),
            Interpreted::Text(s) => Value::String(s),
        }
    }
}

/// Never fails. A hint only adds to what the content itself suggests: JSON is
/// tried when hinted or when the text opens with `{`/`[`, then XDR when
/// hinted or when the text is pure base64, then trimmed text.
pub fn interpret(output: &str, hint: FormatHint) -> Interpreted {
    let trimmed = output.trim();

    let looks_like_json = trimmed.starts_with('{') || trimmed.starts_with('[');
    if hint == FormatHint::Json || looks_like_json {
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            return Interpreted::Json(value);
        }
    }

    if hint == FormatHint::Xdr || is_base64(trimmed) {
        return Interpreted::Xdr {
            xdr: trimmed.to_string(),
        };
    }

    Interpreted::Text(trimmed.to_string())
}

pub fn is_base64(s: &str) -> bool {
    BASE64.is_match(s)
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Labelled `Contract ID:` / `ID:` forms win over a bare 56-character match.
pub fn extract_contract_id(output: &str) -> Option<String> {
    first_capture(CONTRACT_ID_PATTERNS.as_slice(), output)
}

/// Labelled `Transaction hash:` / `Hash:` forms win over a bare 64-hex match.
pub fn extract_transaction_hash(output: &str) -> Option<String> {
    first_capture(TX_HASH_PATTERNS.as_slice(), output)
}
