use serde::Serialize;
use serde_json::Value;

/// Request envelope for the JSON Action wire format
///
/// Serializes to `{api, action, params, authToken, debug}` with absent
/// optional fields omitted from the body. Callers may also hand
/// [`crate::session::client::ActionClient::post_json`] a raw
/// `serde_json::Value`; this type is a convenience for building
/// well-formed envelopes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// API group, e.g. `"admin"` or `"db"`
    pub api: String,
    /// Action name within the API group
    pub action: String,
    /// Action parameters; an empty object when the action takes none
    pub params: Value,
    /// Auth token for the session; filled in by the client when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Debug verbosity requested from the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl ActionRequest {
    /// Creates an envelope with the required fields and empty params
    pub fn new(api: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            action: action.into(),
            params: Value::Object(serde_json::Map::new()),
            auth_token: None,
            debug: None,
        }
    }

    /// Sets the action parameters
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Sets the auth token explicitly
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Sets the debug verbosity
    pub fn with_debug(mut self, level: impl Into<String>) -> Self {
        self.debug = Some(level.into());
        self
    }

    /// Serializes the envelope to a JSON value
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("envelope serialization cannot fail")
    }
}
