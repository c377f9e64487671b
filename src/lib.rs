//! # JSON Action Client
//!
//! Client for JSON Action APIs: servers that expose a single HTTP(S)
//! endpoint accepting POSTed envelopes of the form
//! `{api, action, params, authToken}` and answering with a JSON body
//! whose `errorCode` field reports success or failure.
//!
//! The client handles:
//! - Session lifecycle: `createSession` login producing an auth token,
//!   `deleteSession` logout invalidating it
//! - Attaching the held token to outgoing requests
//! - Optional mTLS via CA and client certificate files
//! - Normalizing transport and server errors into [`error::AppError`]
//!
//! # Example
//! ```ignore
//! use json_action_client::prelude::*;
//! use serde_json::json;
//!
//! let config = Config::new("http://127.0.0.1:8080/api");
//! let client = ActionClient::new(config)?;
//! client.login(Some("admin"), Some("ADMIN")).await?;
//!
//! let response = client
//!     .with_session(|client| async move {
//!         client
//!             .post_json(json!({
//!                 "api": "db",
//!                 "action": "listDatabases",
//!                 "params": {},
//!             }))
//!             .await
//!     })
//!     .await?;
//! ```

/// Client configuration: endpoint, certificates, timeout
pub mod config;
/// Wire constants and defaults
pub mod constants;
/// Error types for transport and server-reported failures
pub mod error;
/// Request and response models for the JSON Action wire format
pub mod model;
/// Commonly used types, re-exported
pub mod prelude;
/// Session client: login, logout, request posting
pub mod session;
/// Logging utilities
pub mod utils;

/// Library version, taken from Cargo.toml at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
