// src/cli/mod.rs
// Bridge to the `stellar` command-line tool: argument translation, process
// execution, and stdout interpretation.
pub mod args;
pub mod error;
pub mod executor;
pub mod output;

pub use args::{CommandLine, FlagTable, ParamValue, Params, Trailing, Word};
pub use error::{ArgError, CliError};
pub use executor::{CliExecutor, CliOutput, ExecOptions};
pub use output::{extract_contract_id, extract_transaction_hash, interpret, FormatHint, Interpreted};
