//! # JSON Action Client Prelude
//!
//! Convenient single import for the types most callers need.
//!
//! ## Usage
//!
//! ```rust
//! use json_action_client::prelude::*;
//!
//! let config = Config::new("http://127.0.0.1:8080/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the JSON Action client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

/// Server-reported error details
pub use crate::error::ApiError;

// ============================================================================
// SESSION CLIENT
// ============================================================================

/// Client for a JSON Action endpoint with session management
pub use crate::session::client::ActionClient;

// ============================================================================
// WIRE MODELS
// ============================================================================

/// Request envelope builder
pub use crate::model::requests::ActionRequest;

/// Login response model
pub use crate::model::responses::LoginResponse;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup helper
pub use crate::utils::logger::setup_logger;
