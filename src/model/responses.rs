use serde::Deserialize;
use serde_json::Value;

/// Fields of a successful `createSession` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque token identifying the new server-side session
    pub auth_token: String,
}

/// Extracts the server-reported `errorCode`, if present and integral
pub fn error_code(response: &Value) -> Option<i64> {
    response.get("errorCode").and_then(Value::as_i64)
}

/// Extracts the server-reported `errorMessage`, if present
pub fn error_message(response: &Value) -> Option<String> {
    response
        .get("errorMessage")
        .and_then(Value::as_str)
        .map(String::from)
}
