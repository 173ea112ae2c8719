// src/tools/params.rs
//! Declared tool parameters and the JSON input schema built from them.

use serde_json::{json, Map, Value};

pub const NETWORKS: &[&str] = &["testnet", "mainnet", "futurenet", "local"];
pub const OUTPUT_FORMATS: &[&str] = &["text", "json", "json-formatted"];
pub const DURABILITY: &[&str] = &["persistent", "temporary"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
    StringList,
    /// Array of JSON objects, forwarded untouched. Only direct RPC tools use
    /// it; the CLI never sees nested objects.
    ObjectList,
    Map,
    Enum(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: Kind,
    pub description: &'static str,
}

pub const fn string(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        kind: Kind::String,
        description,
    }
}

pub const fn number(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        kind: Kind::Number,
        description,
    }
}

pub const fn boolean(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        kind: Kind::Boolean,
        description,
    }
}

pub const fn list(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        kind: Kind::StringList,
        description,
    }
}

pub const fn objects(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        kind: Kind::ObjectList,
        description,
    }
}

pub const fn map(name: &'static str, description: &'static str) -> Param {
    Param {
        name,
        kind: Kind::Map,
        description,
    }
}

pub const fn choice(
    name: &'static str,
    values: &'static [&'static str],
    description: &'static str,
) -> Param {
    Param {
        name,
        kind: Kind::Enum(values),
        description,
    }
}

impl Param {
    pub fn schema(&self) -> Value {
        let mut prop = match self.kind {
            Kind::String => json!({ "type": "string" }),
            Kind::Number => json!({ "type": "number" }),
            Kind::Boolean => json!({ "type": "boolean" }),
            Kind::StringList => json!({ "type": "array", "items": { "type": "string" } }),
            Kind::ObjectList => json!({ "type": "array", "items": { "type": "object" } }),
            Kind::Map => json!({ "type": "object", "additionalProperties": true }),
            Kind::Enum(values) => json!({ "type": "string", "enum": values }),
        };
        prop["description"] = Value::String(self.description.to_string());
        prop
    }
}

pub fn input_schema(params: &[Param], required: &[&str]) -> Value {
    let properties: Map<String, Value> = params
        .iter()
        .map(|p| (p.name.to_string(), p.schema()))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

// Shared option groups.

pub const NETWORK: Param = choice("network", NETWORKS, "Stellar network");
pub const NETWORK_NAME: Param = string("network", "Name of a configured network");
pub const SOURCE_ACCOUNT: Param = string(
    "sourceAccount",
    "Account that signs and pays (identity name, public key, or secret key)",
);
pub const FEE: Param = number("fee", "Transaction fee in stroops");
pub const BUILD_ONLY: Param = boolean("buildOnly", "Only build the transaction, do not submit");
pub const SIGN_WITH_KEY: Param = string("signWithKey", "Key to sign with (identity, secret key, or seed phrase)");
pub const CONFIG_DIR: Param = string("configDir", "Location of the config directory");
pub const OUTPUT: Param = choice("output", OUTPUT_FORMATS, "Output format");

pub const RPC: &[Param] = &[
    string("rpcUrl", "RPC server endpoint"),
    map("rpcHeaders", "Extra HTTP headers sent to the RPC server"),
    string("networkPassphrase", "Network passphrase"),
    NETWORK_NAME,
];

/// Options shared by every `tx new` operation.
pub const TX_OPTIONS: &[Param] = &[SOURCE_ACCOUNT, NETWORK, FEE, BUILD_ONLY, SIGN_WITH_KEY];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_lists_properties_and_required() {
        let schema = input_schema(&[string("name", "Identity name"), boolean("fund", "Fund it")], &["name"]);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["fund"]["description"], "Fund it");
        assert_eq!(schema["required"], json!(["name"]));
    }

    #[test]
    fn enum_values_are_exposed() {
        assert_eq!(NETWORK.schema()["enum"], json!(NETWORKS));
    }
}
