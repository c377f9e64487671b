//! Configuration for the JSON Action client
//!
//! All parameters are supplied by the caller at construction time; nothing
//! is read from the environment.

use crate::constants::DEFAULT_TIMEOUT_SECONDS;
use std::path::PathBuf;

/// Connection parameters for a JSON Action endpoint
#[derive(Debug, Clone)]
pub struct Config {
    /// The JSON Action endpoint URL, e.g. `https://127.0.0.1:8444/api`
    pub endpoint: String,
    /// Optional CA certificate file, in PEM format, used to verify the
    /// server certificate
    pub ca_cert: Option<PathBuf>,
    /// Optional client key pair (certificate and key) file, in PEM format,
    /// used for mTLS authentication
    pub client_cert: Option<PathBuf>,
    /// HTTP request timeout in seconds
    pub timeout: u64,
}

impl Config {
    /// Creates a configuration for the given endpoint with default settings
    ///
    /// # Arguments
    /// * `endpoint` - The JSON Action endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ca_cert: None,
            client_cert: None,
            timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Sets the CA certificate file used to verify the server certificate
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    /// Sets the client key pair file used for mTLS authentication
    pub fn with_client_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_cert = Some(path.into());
        self
    }

    /// Sets the HTTP request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}
