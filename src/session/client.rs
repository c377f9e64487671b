//! Session client for JSON Action endpoints
//!
//! This module provides [`ActionClient`], which handles:
//! - Login (`createSession`) producing an auth token
//! - Attaching the held token to outgoing requests
//! - Logout (`deleteSession`) invalidating the token, idempotently
//! - Scoped use via [`ActionClient::with_session`], guaranteeing logout
//!   on exit

use crate::config::Config;
use crate::constants::{
    ACTION_CREATE_SESSION, ACTION_DELETE_SESSION, API_ADMIN, DEBUG_LEVEL_MAX,
    IDLE_CONNECTION_TIMEOUT_SECONDS, USER_AGENT,
};
use crate::error::{ApiError, AppError};
use crate::model::requests::ActionRequest;
use crate::model::responses::{LoginResponse, error_code, error_message};
use reqwest::{Certificate, Client as HttpClient, Identity};
use serde_json::{Value, json};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Client for a JSON Action endpoint with session management
///
/// Holds the connection parameters, a persistent HTTP client, and the
/// current auth token. The token is populated by [`ActionClient::login`],
/// attached to every request posted without one, and cleared by
/// [`ActionClient::logout`].
pub struct ActionClient {
    config: Config,
    http: HttpClient,
    auth_token: RwLock<Option<String>>,
}

impl ActionClient {
    /// Creates a new client for the configured endpoint
    ///
    /// Builds the underlying HTTP client once: request timeout from the
    /// configuration, the CA certificate added as a root certificate when
    /// configured, and the client key pair loaded as a TLS identity when
    /// configured.
    ///
    /// # Arguments
    /// * `config` - Connection parameters for the endpoint
    ///
    /// # Returns
    /// * `Ok(ActionClient)` - Client ready to use
    /// * `Err(AppError)` - If a configured certificate file cannot be
    ///   read or parsed
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .use_rustls_tls();

        if let Some(ca_cert) = &config.ca_cert {
            let pem = read_pem(ca_cert)?;
            let cert = Certificate::from_pem(&pem).map_err(|e| AppError::InvalidCertificate {
                path: ca_cert.clone(),
                message: e.to_string(),
            })?;
            builder = builder.add_root_certificate(cert);

            if let Some(client_cert) = &config.client_cert {
                let pem = read_pem(client_cert)?;
                let identity =
                    Identity::from_pem(&pem).map_err(|e| AppError::InvalidCertificate {
                        path: client_cert.clone(),
                        message: e.to_string(),
                    })?;
                builder = builder.identity(identity);
            }
        }

        let http = builder.build().expect("Failed to create HTTP client");

        Ok(Self {
            config,
            http,
            auth_token: RwLock::new(None),
        })
    }

    /// Returns the currently held auth token, if any
    pub async fn auth_token(&self) -> Option<String> {
        self.auth_token.read().await.clone()
    }

    /// Logs in to the JSON Action server and stores the auth token
    ///
    /// Credentials are optional as a pair: when both are given they are
    /// sent in the `createSession` params; otherwise the configured
    /// client-certificate identity authenticates the call.
    ///
    /// # Arguments
    /// * `username` - Username to log in with
    /// * `password` - Password to log in with
    ///
    /// # Returns
    /// * `Ok(String)` - The auth token for the new session
    /// * `Err(AppError)` - Connection error on transport failure, API
    ///   error if the server rejects the credentials
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, AppError> {
        let mut params = serde_json::Map::new();
        // Only include username/password in params if both are provided.
        if let (Some(username), Some(password)) = (username, password) {
            params.insert("username".to_string(), json!(username));
            params.insert("password".to_string(), json!(password));
        }
        params.insert(
            "idleConnectionTimeoutSeconds".to_string(),
            json!(IDLE_CONNECTION_TIMEOUT_SECONDS),
        );

        let request = ActionRequest::new(API_ADMIN, ACTION_CREATE_SESSION)
            .with_params(Value::Object(params))
            .with_debug(DEBUG_LEVEL_MAX);

        let response = self.post_json(request.to_value()).await?;

        let login: LoginResponse = serde_json::from_value(response).map_err(|_| {
            AppError::InvalidResponse("login response is missing authToken".to_string())
        })?;

        let mut token = self.auth_token.write().await;
        *token = Some(login.auth_token.clone());
        info!("Login successful");
        Ok(login.auth_token)
    }

    /// Logs out of the JSON Action server and clears the auth token
    ///
    /// Idempotent: a no-op when no token is held. The token is cleared
    /// before the `deleteSession` call is sent, so the client is logged
    /// out locally even if the server call fails.
    pub async fn logout(&self) -> Result<(), AppError> {
        let token = self.auth_token.write().await.take();
        let Some(token) = token else {
            debug!("No active session, logout is a no-op");
            return Ok(());
        };

        let request = ActionRequest::new(API_ADMIN, ACTION_DELETE_SESSION).with_auth_token(token);
        self.post_json(request.to_value()).await?;
        info!("Logged out");
        Ok(())
    }

    /// Posts a JSON Action envelope and returns the server's response
    ///
    /// If the envelope carries no `authToken` and a token is held, the
    /// held token is attached. The response body is returned unmodified
    /// when the server reports success (`errorCode` present and zero).
    ///
    /// # Arguments
    /// * `request` - The envelope to post, normally
    ///   `{api, action, params}`
    ///
    /// # Returns
    /// * `Ok(Value)` - The server's JSON response, as-is
    /// * `Err(AppError)` - Connection error when the server is
    ///   unreachable, API error when the response reports a failure
    pub async fn post_json(&self, mut request: Value) -> Result<Value, AppError> {
        let action = request
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        if request.get("authToken").is_none() {
            let token = self.auth_token.read().await;
            if let (Some(token), Some(envelope)) = (token.as_ref(), request.as_object_mut()) {
                envelope.insert("authToken".to_string(), json!(token));
            }
        }

        debug!("Posting '{}' to {}", action, self.config.endpoint);

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(
                    "Connection failure: server at {} is unreachable: {}",
                    self.config.endpoint, e
                );
                AppError::Connection {
                    endpoint: self.config.endpoint.clone(),
                    source: e,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request '{}' failed with status {}: {}", action, status, body);
            return Err(AppError::Unexpected(status));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            error!("Failed to decode response for '{}': {}", action, e);
            AppError::InvalidResponse(e.to_string())
        })?;

        match error_code(&response_json) {
            Some(0) => Ok(response_json),
            code => {
                let message = error_message(&response_json);
                error!(
                    "JSON Action error for '{}', errorCode: {:?}, errorMessage: {:?}",
                    action, code, message
                );
                Err(AppError::Api(ApiError {
                    action,
                    code,
                    message,
                    response: response_json,
                }))
            }
        }
    }

    /// Runs a closure against the client, guaranteeing logout on exit
    ///
    /// [`ActionClient::logout`] is invoked exactly once after the closure
    /// completes, whether it succeeded or failed. A logout failure during
    /// teardown is logged as a warning and never masks the closure's own
    /// result.
    ///
    /// # Example
    /// ```ignore
    /// client.login(Some("admin"), Some("ADMIN")).await?;
    /// let databases = client
    ///     .with_session(|client| async move {
    ///         client
    ///             .post_json(json!({"api": "db", "action": "listDatabases", "params": {}}))
    ///             .await
    ///     })
    ///     .await?;
    /// ```
    pub async fn with_session<'a, F, Fut, T>(&'a self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&'a Self) -> Fut,
        Fut: Future<Output = Result<T, AppError>> + 'a,
    {
        let result = f(self).await;
        if let Err(e) = self.logout().await {
            // The caller's result takes precedence over teardown failures.
            warn!("Failed to log out: {}", e);
        }
        result
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>, AppError> {
    std::fs::read(path).map_err(|e| AppError::InvalidCertificate {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
