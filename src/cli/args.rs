//! Argument translation.
//!
//! Turns the JSON argument object of a tool call into the exact word
//! sequence the `stellar` parser expects. Nothing in here performs I/O, so
//! every function is deterministic for a given input: the same parameter
//! object always yields the same argument vector.
//!
//! The layout of a translated command line is always
//!
//! ```text
//! <subcommand words and positional slots> <flags in object order> [-- <trailing region>]
//! ```

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::cli::error::ArgError;

/// Parameter names whose CLI spelling does not follow the camelCase to
/// `--kebab-case` rule. Every entry must differ from what the fallback would
/// produce, otherwise it belongs to the fallback.
pub const GLOBAL_FLAGS: &[(&str, &str)] = &[
    ("wasmPath", "--wasm"),
    ("contractId", "--id"),
    ("rpcHeaders", "--rpc-header"),
    ("signerKey", "--signer"),
    ("inputFormat", "--input"),
    ("outputFormat", "--output"),
];

/// A single present parameter value. Absent and `null` values never become a
/// `ParamValue`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Str(String),
    Num(String),
    List(Vec<String>),
    /// One level of a string-keyed map, kept in the order the caller sent it.
    Pairs(Vec<(String, String)>),
}

impl ParamValue {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(ParamValue::Bool(*b)),
            Value::String(s) => Some(ParamValue::Str(s.clone())),
            Value::Number(n) => Some(ParamValue::Num(n.to_string())),
            Value::Array(items) => Some(ParamValue::List(items.iter().map(format_value).collect())),
            Value::Object(map) => Some(ParamValue::Pairs(
                map.iter()
                    .map(|(k, v)| (k.clone(), format_value(v)))
                    .collect(),
            )),
        }
    }

    /// The value as a single word, for strings and numbers.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) | ParamValue::Num(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders a JSON value as one literal command-line word. Strings are passed
/// through untouched (no quoting, there is no shell), everything else is
/// serialized as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The parameter object of one invocation, in the order the caller sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Builds the parameter list from a tool call's `arguments` value.
    /// A missing (`null`) argument object is treated as empty.
    pub fn from_json(value: &Value) -> Result<Self, ArgError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(ArgError::NotAnObject),
        }
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut entries: Vec<(String, ParamValue)> = Vec::with_capacity(map.len());
        for (key, value) in map {
            let key = normalize_key(key);
            let Some(value) = ParamValue::from_json(value) else {
                continue;
            };
            // `wasm_path` and `wasmPath` collapse onto one key; the first wins.
            if entries.iter().any(|(existing, _)| *existing == key) {
                debug!("duplicate parameter spelling for '{}' ignored", key);
                continue;
            }
            entries.push((key, value));
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_scalar)
    }

    pub fn is_true(&self, key: &str) -> bool {
        matches!(self.get(key), Some(ParamValue::Bool(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `wasm_path` -> `wasmPath`. Keys without underscores are returned as is.
pub fn normalize_key(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' && i > 0 {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Fallback flag spelling: `networkPassphrase` -> `--network-passphrase`.
pub fn kebab_flag(key: &str) -> String {
    let mut flag = String::with_capacity(key.len() + 4);
    flag.push_str("--");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            flag.push('-');
            flag.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            flag.push('-');
        } else {
            flag.push(ch);
        }
    }
    flag
}

fn lookup<'t>(table: &[(&str, &'t str)], key: &str) -> Option<&'t str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, flag)| *flag)
}

/// Flag-naming table: per-tool overrides, then [`GLOBAL_FLAGS`], then the
/// kebab-case fallback. Lookup is total.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagTable<'a> {
    overrides: &'a [(&'a str, &'a str)],
}

impl<'a> FlagTable<'a> {
    pub const fn new(overrides: &'a [(&'a str, &'a str)]) -> Self {
        Self { overrides }
    }

    pub fn flag_for(&self, key: &str) -> String {
        lookup(self.overrides, key)
            .or_else(|| lookup(GLOBAL_FLAGS, key))
            .map(str::to_string)
            .unwrap_or_else(|| kebab_flag(key))
    }
}

/// Separator used when a map parameter becomes `--flag key<sep>value`.
fn pair_separator(key: &str) -> &'static str {
    match key {
        "rpcHeaders" => ":",
        _ => "=",
    }
}

/// One element of a subcommand grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word<'a> {
    /// A literal subcommand word, always emitted.
    Lit(&'a str),
    /// A positional parameter emitted as bare word(s); skipped when absent.
    Slot(&'a str),
    /// A parameter whose value selects a literal word, e.g. `send` ->
    /// `path-payment-strict-send`.
    Choice(&'a str, &'a [(&'a str, &'a str)]),
}

/// Free-form region appended after a literal `--`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trailing<'a> {
    #[default]
    None,
    /// `-- <v1> <v2> ...` from a list parameter; omitted when the list is
    /// absent or empty.
    Words(&'a str),
    /// `-- <function> --<arg> <value> ...` from a function name parameter and
    /// a map of named arguments.
    Call { function: &'a str, args: &'a str },
}

/// The grammar of one subcommand.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandLine<'a> {
    pub words: &'a [Word<'a>],
    pub flags: FlagTable<'a>,
    pub trailing: Trailing<'a>,
    /// When set, parameters outside this list are dropped instead of being
    /// turned into flags.
    pub accepted: Option<&'a [&'a str]>,
}

impl<'a> CommandLine<'a> {
    /// Produces the argument vector. Total: validation is a separate step
    /// (see [`CommandLine::check_choices`], [`require`], [`require_one_of`]).
    pub fn translate(&self, params: &Params) -> Vec<String> {
        let mut argv = Vec::new();
        let mut consumed: HashSet<&str> = HashSet::new();

        for word in self.words {
            match *word {
                Word::Lit(w) => argv.push(w.to_string()),
                Word::Slot(key) => {
                    consumed.insert(key);
                    if let Some(value) = params.get(key) {
                        push_bare(&mut argv, value);
                    }
                }
                Word::Choice(key, choices) => {
                    consumed.insert(key);
                    if let Some(value) = params.str(key) {
                        let word = lookup(choices, value).unwrap_or(value);
                        argv.push(word.to_string());
                    }
                }
            }
        }

        match self.trailing {
            Trailing::None => {}
            Trailing::Words(key) => {
                consumed.insert(key);
            }
            Trailing::Call { function, args } => {
                consumed.insert(function);
                consumed.insert(args);
            }
        }

        for (key, value) in params.iter() {
            if consumed.contains(key) {
                continue;
            }
            if let Some(accepted) = self.accepted {
                if !accepted.contains(&key) {
                    debug!("ignoring undeclared parameter '{}'", key);
                    continue;
                }
            }
            push_flag(&mut argv, &self.flags.flag_for(key), key, value);
        }

        self.push_trailing(&mut argv, params);
        argv
    }

    /// Rejects `Choice` values that have no mapping.
    pub fn check_choices(&self, params: &Params) -> Result<(), ArgError> {
        for word in self.words {
            if let Word::Choice(key, choices) = *word {
                if let Some(value) = params.str(key) {
                    if lookup(choices, value).is_none() {
                        let allowed: Vec<&str> = choices.iter().map(|(k, _)| *k).collect();
                        return Err(ArgError::InvalidValue {
                            key: key.to_string(),
                            reason: format!("expected one of {}", allowed.join(", ")),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn push_trailing(&self, argv: &mut Vec<String>, params: &Params) {
        match self.trailing {
            Trailing::None => {}
            Trailing::Words(key) => match params.get(key) {
                Some(ParamValue::List(items)) if !items.is_empty() => {
                    argv.push("--".to_string());
                    argv.extend(items.iter().cloned());
                }
                Some(ParamValue::Str(s)) | Some(ParamValue::Num(s)) => {
                    argv.push("--".to_string());
                    argv.push(s.clone());
                }
                _ => {}
            },
            Trailing::Call { function, args } => {
                let Some(name) = params.str(function) else {
                    return;
                };
                argv.push("--".to_string());
                argv.push(name.to_string());
                if let Some(ParamValue::Pairs(pairs)) = params.get(args) {
                    for (arg, value) in pairs {
                        argv.push(format!("--{}", arg));
                        argv.push(value.clone());
                    }
                }
            }
        }
    }
}

fn push_bare(argv: &mut Vec<String>, value: &ParamValue) {
    match value {
        ParamValue::Bool(_) => {}
        ParamValue::Str(s) | ParamValue::Num(s) => argv.push(s.clone()),
        ParamValue::List(items) => argv.extend(items.iter().cloned()),
        ParamValue::Pairs(pairs) => {
            argv.extend(pairs.iter().map(|(k, v)| format!("{}={}", k, v)));
        }
    }
}

fn push_flag(argv: &mut Vec<String>, flag: &str, key: &str, value: &ParamValue) {
    match value {
        ParamValue::Bool(true) => argv.push(flag.to_string()),
        ParamValue::Bool(false) => {}
        ParamValue::Str(s) | ParamValue::Num(s) => {
            argv.push(flag.to_string());
            argv.push(s.clone());
        }
        ParamValue::List(items) => {
            for item in items {
                argv.push(flag.to_string());
                argv.push(item.clone());
            }
        }
        ParamValue::Pairs(pairs) => {
            let sep = pair_separator(key);
            for (k, v) in pairs {
                argv.push(flag.to_string());
                argv.push(format!("{}{}{}", k, sep, v));
            }
        }
    }
}

/// Positional keys first, in the order given, then every other present key
/// as a flag in object order.
pub fn build_args(params: &Params, positional: &[&str], flags: &FlagTable<'_>) -> Vec<String> {
    let words: Vec<Word<'_>> = positional.iter().map(|key| Word::Slot(key)).collect();
    CommandLine {
        words: &words,
        flags: *flags,
        ..Default::default()
    }
    .translate(params)
}

pub fn require(params: &Params, keys: &[&str]) -> Result<(), ArgError> {
    match keys.iter().find(|key| !params.contains(key)) {
        Some(missing) => Err(ArgError::MissingField(missing.to_string())),
        None => Ok(()),
    }
}

pub fn require_one_of(params: &Params, keys: &[&str]) -> Result<(), ArgError> {
    if keys.iter().any(|key| params.contains(key)) {
        Ok(())
    } else {
        Err(ArgError::MissingAlternative(
            keys.iter().map(|k| k.to_string()).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        Params::from_json(&value).unwrap()
    }

    #[test]
    fn positional_then_true_boolean() {
        let p = params(json!({"name": "alice", "overwrite": true, "configDir": null}));
        let argv = build_args(&p, &["name"], &FlagTable::default());
        assert_eq!(argv, vec!["alice", "--overwrite"]);
    }

    #[test]
    fn length_matches_scalar_and_boolean_counts() {
        let p = params(json!({
            "name": "bob",
            "network": "testnet",
            "fee": 100,
            "fund": true,
            "overwrite": false,
            "hdPath": "0"
        }));
        let argv = build_args(&p, &["name"], &FlagTable::default());
        // 1 positional + 2 * 3 scalars + 1 true boolean
        assert_eq!(argv.len(), 1 + 2 * 3 + 1);
        assert_eq!(
            argv,
            vec!["bob", "--network", "testnet", "--fee", "100", "--fund", "--hd-path", "0"]
        );
    }

    #[test]
    fn arrays_repeat_the_flag_in_order() {
        let p = params(json!({"path": ["USDC:GA", "native", "EURT:GB"]}));
        let argv = build_args(&p, &[], &FlagTable::default());
        assert_eq!(
            argv,
            vec!["--path", "USDC:GA", "--path", "native", "--path", "EURT:GB"]
        );
    }

    #[test]
    fn maps_become_key_value_pairs() {
        let p = params(json!({"meta": {"home_domain": "example.com", "version": 2}}));
        let argv = build_args(&p, &[], &FlagTable::default());
        assert_eq!(
            argv,
            vec!["--meta", "home_domain=example.com", "--meta", "version=2"]
        );
    }

    #[test]
    fn rpc_headers_use_colon_separator() {
        let p = params(json!({"rpcHeaders": {"Authorization": "Bearer x"}}));
        let argv = build_args(&p, &[], &FlagTable::default());
        assert_eq!(argv, vec!["--rpc-header", "Authorization:Bearer x"]);
    }

    #[test]
    fn table_wins_over_fallback_and_overrides_win_over_table() {
        let table = FlagTable::default();
        assert_eq!(table.flag_for("contractId"), "--id");
        assert_eq!(table.flag_for("wasmPath"), "--wasm");
        assert_eq!(table.flag_for("networkPassphrase"), "--network-passphrase");

        let overrides = [("contractId", "--contract-id")];
        let table = FlagTable::new(&overrides);
        assert_eq!(table.flag_for("contractId"), "--contract-id");
    }

    #[test]
    fn global_table_has_no_redundant_or_duplicate_entries() {
        let mut keys = HashSet::new();
        let mut flags = HashSet::new();
        for (key, flag) in GLOBAL_FLAGS {
            assert_ne!(kebab_flag(key), *flag, "'{}' duplicates the fallback", key);
            assert!(keys.insert(*key), "duplicate key '{}'", key);
            assert!(flags.insert(*flag), "duplicate flag '{}'", flag);
        }
    }

    #[test]
    fn snake_case_keys_are_normalized() {
        assert_eq!(normalize_key("source_account"), "sourceAccount");
        assert_eq!(normalize_key("ttl_ledger_only"), "ttlLedgerOnly");
        assert_eq!(normalize_key("network"), "network");

        let p = params(json!({"source_account": "alice", "sourceAccount": "bob"}));
        assert_eq!(p.len(), 1);
        assert_eq!(p.str("sourceAccount"), Some("alice"));
    }

    #[test]
    fn call_region_is_always_last() {
        let words = [Word::Lit("contract"), Word::Lit("invoke")];
        let line = CommandLine {
            words: &words,
            trailing: Trailing::Call {
                function: "functionName",
                args: "functionArgs",
            },
            ..Default::default()
        };
        let p = params(json!({
            "functionName": "transfer",
            "functionArgs": {"to": "GABC", "amount": 10, "memo": "two words"},
            "contractId": "CXYZ",
            "sendTx": true
        }));
        let argv = line.translate(&p);
        assert_eq!(
            argv,
            vec![
                "contract", "invoke", "--id", "CXYZ", "--send-tx", "--", "transfer", "--to",
                "GABC", "--amount", "10", "--memo", "two words",
            ]
        );
    }

    #[test]
    fn trailing_words_omitted_when_empty() {
        let words = [Word::Lit("contract"), Word::Lit("deploy")];
        let line = CommandLine {
            words: &words,
            trailing: Trailing::Words("constructorArgs"),
            ..Default::default()
        };
        let argv = line.translate(&params(json!({"constructorArgs": []})));
        assert_eq!(argv, vec!["contract", "deploy"]);

        let argv = line.translate(&params(json!({"constructorArgs": ["--admin", "GA"]})));
        assert_eq!(argv, vec!["contract", "deploy", "--", "--admin", "GA"]);
    }

    #[test]
    fn choice_maps_value_to_word() {
        const MODES: &[(&str, &str)] = &[
            ("send", "path-payment-strict-send"),
            ("receive", "path-payment-strict-receive"),
        ];
        let words = [Word::Lit("tx"), Word::Lit("new"), Word::Choice("strictMode", MODES)];
        let line = CommandLine {
            words: &words,
            ..Default::default()
        };
        let argv = line.translate(&params(json!({"strictMode": "send", "network": "testnet"})));
        assert_eq!(
            argv,
            vec!["tx", "new", "path-payment-strict-send", "--network", "testnet"]
        );

        let err = line
            .check_choices(&params(json!({"strictMode": "sideways"})))
            .unwrap_err();
        assert!(matches!(err, ArgError::InvalidValue { .. }));
    }

    #[test]
    fn undeclared_parameters_are_dropped() {
        let accepted = ["network"];
        let line = CommandLine {
            accepted: Some(&accepted[..]),
            ..Default::default()
        };
        let argv = line.translate(&params(json!({"network": "testnet", "evil": "--rm"})));
        assert_eq!(argv, vec!["--network", "testnet"]);
    }

    #[test]
    fn requirement_checks() {
        let p = params(json!({"wasmHash": "abc", "network": null}));
        assert_eq!(
            require(&p, &["wasmHash", "network"]),
            Err(ArgError::MissingField("network".into()))
        );
        assert!(require_one_of(&p, &["wasmPath", "wasmHash"]).is_ok());
        assert!(matches!(
            require_one_of(&p, &["wasm", "contractId"]),
            Err(ArgError::MissingAlternative(_))
        ));
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        assert_eq!(Params::from_json(&json!([1, 2])), Err(ArgError::NotAnObject));
        assert!(Params::from_json(&Value::Null).unwrap().is_empty());
    }
}
