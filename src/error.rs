//! Error types for the JSON Action client
//!
//! Two failure kinds matter to callers: the server was unreachable
//! ([`AppError::Connection`]) or the server answered and reported an error
//! in its JSON body ([`AppError::Api`]). Everything else a request can go
//! wrong with (unexpected HTTP status, undecodable body, bad certificate
//! files) gets its own variant so nothing from the transport layer leaks.

use reqwest::StatusCode;
use serde_json::Value;
use std::path::PathBuf;

/// The server reported a failure in its JSON response
///
/// A response is successful only when its `errorCode` field is present and
/// zero; any other response produces this error, carrying whatever the
/// server did send.
#[derive(Debug, thiserror::Error)]
#[error("JSON Action error for '{action}', errorCode: {code:?}, errorMessage: {message:?}")]
pub struct ApiError {
    /// The action that was requested
    pub action: String,
    /// Server error code, if the response carried one
    pub code: Option<i64>,
    /// Server error message, if the response carried one
    pub message: Option<String>,
    /// The full response body as returned by the server
    pub response: Value,
}

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never completed: connection refused, DNS failure,
    /// TLS handshake failure, timeout
    #[error("server connection to {endpoint} failed: {source}")]
    Connection {
        /// The endpoint that was unreachable
        endpoint: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a JSON body reporting an error
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server answered with a non-success HTTP status
    #[error("unexpected HTTP status: {0}")]
    Unexpected(StatusCode),
    /// A configured certificate file could not be read or parsed
    #[error("invalid certificate {}: {message}", .path.display())]
    InvalidCertificate {
        /// Path of the offending certificate file
        path: PathBuf,
        /// What went wrong reading or parsing it
        message: String,
    },
    /// The server answered successfully but the body was not usable
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
