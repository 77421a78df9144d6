//! JSON-RPC 2.0 envelope for the memory service's `tools/call` endpoint.
//!
//! Only the subset the service speaks is modelled: one request shape and a
//! response carrying either `result` or `error`.

use mnemo_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const JSONRPC_VERSION: &str = "2.0";

/// The only method the service exposes; the tool name travels in `params`.
pub const TOOLS_CALL: &str = "tools/call";

/// Request id sent on every call. It carries no ordering meaning.
pub const REQUEST_ID: u64 = 1;

/// Message used when the service reports an error without one.
pub const UNKNOWN_ERROR: &str = "Unknown error";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Requests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCallRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: ToolCallParams,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolCallRequest {
    pub fn new(tool: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id: REQUEST_ID,
            method: TOOLS_CALL.into(),
            params: ToolCallParams {
                name: tool.into(),
                arguments,
            },
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Responses
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Response envelope. Unknown fields (`jsonrpc`, `id`) are ignored.
///
/// `error` is kept as raw JSON: any non-null value means the call failed,
/// whatever its shape.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ToolCallResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ToolCallResponse {
    /// Unwrap the envelope.
    ///
    /// An `error` wins over any `result`; its `message` is used when it is a
    /// string, [`UNKNOWN_ERROR`] otherwise. A missing `result` and an
    /// explicit `null` both come back as [`Value::Null`].
    pub fn into_result(self) -> Result<Value> {
        if let Some(err) = self.error {
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR)
                .to_owned();
            return Err(Error::Application(message));
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_matches_wire_shape() {
        let mut args = Map::new();
        args.insert("id".into(), json!(7));
        let req = ToolCallRequest::new("memory_get", args);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "tools/call",
                "params": { "name": "memory_get", "arguments": { "id": 7 } }
            })
        );
    }

    #[test]
    fn request_without_arguments_sends_empty_object() {
        let req = ToolCallRequest::new("memory_stats", Map::new());
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"arguments\":{}"));
    }

    #[test]
    fn success_returns_result() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"result":{"id":3,"content":"hi"}}"#;
        let resp: ToolCallResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result().unwrap(), json!({"id": 3, "content": "hi"}));
    }

    #[test]
    fn missing_result_is_null() {
        let resp: ToolCallResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn error_message_is_passed_through() {
        let raw = r#"{"error":{"code":-32000,"message":"not found"}}"#;
        let resp: ToolCallResponse = serde_json::from_str(raw).unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, Error::Application(ref m) if m == "not found"));
    }

    #[test]
    fn error_without_message_uses_fallback() {
        let resp: ToolCallResponse = serde_json::from_str(r#"{"error":{}}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn string_error_counts_as_application_error() {
        let resp: ToolCallResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, Error::Application(ref m) if m == UNKNOWN_ERROR));
    }

    #[test]
    fn non_string_message_uses_fallback() {
        let resp: ToolCallResponse =
            serde_json::from_str(r#"{"error":{"message":123}}"#).unwrap();
        assert_eq!(resp.into_result().unwrap_err().to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn null_error_is_success() {
        let resp: ToolCallResponse = serde_json::from_str(r#"{"result":5,"error":null}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), json!(5));
    }

    #[test]
    fn error_takes_precedence_over_result() {
        let raw = r#"{"result":42,"error":{"message":"boom"}}"#;
        let resp: ToolCallResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_result().unwrap_err().to_string(), "boom");
    }
}
