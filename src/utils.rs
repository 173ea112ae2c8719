//! Small helpers shared by the MCP handlers.

use serde::de::DeserializeOwned;
use serde_json::{from_value, Value};

use crate::mcp::protocol::{error_codes, Response};

/// Extracts a required field of a request's `params`, or the `INVALID_PARAMS`
/// response to send back.
pub fn get_required_arg<T: DeserializeOwned>(
    args: &Value,
    key: &str,
    req_id: &Value,
) -> Result<T, Response> {
    from_value(args.get(key).cloned().unwrap_or(Value::Null)).map_err(|_| {
        Response::error(
            req_id.clone(),
            error_codes::INVALID_PARAMS,
            format!("Missing or invalid required argument: '{}'", key),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_argument_becomes_invalid_params() {
        let args = json!({"name": "stellar_doctor"});
        let name: String = get_required_arg(&args, "name", &json!(1)).unwrap();
        assert_eq!(name, "stellar_doctor");

        let err = get_required_arg::<String>(&args, "arguments", &json!(1)).unwrap_err();
        let error = err.error.unwrap();
        assert_eq!(error.code, error_codes::INVALID_PARAMS);
        assert!(error.message.contains("'arguments'"));
    }
}
