/// API group that owns session management actions
pub const API_ADMIN: &str = "admin";
/// Action that creates a server-side session and returns an auth token
pub const ACTION_CREATE_SESSION: &str = "createSession";
/// Action that deletes the server-side session for an auth token
pub const ACTION_DELETE_SESSION: &str = "deleteSession";
/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Server-side idle connection timeout requested at login, in seconds
pub const IDLE_CONNECTION_TIMEOUT_SECONDS: u64 = 30;
/// Debug verbosity requested on the login call
pub const DEBUG_LEVEL_MAX: &str = "max";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "json-action-client/0.1.0";
