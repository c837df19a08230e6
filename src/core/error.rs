//! Typed error handling for the suppliers service
//!
//! Every failure a handler can produce is a [`SupplierError`]. Each variant
//! carries a more specific error type and knows its HTTP status code and
//! machine-readable error code, so handlers can simply return
//! `Result<_, SupplierError>` and let [`IntoResponse`] render the body.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookup outcomes surfaced to clients (not found, conflict)
//! - [`RequestError`]: malformed path identifiers or bodies
//! - [`StorageError`]: store failures (poisoned lock)
//!
//! [`ConfigError`] is kept apart: it only occurs at startup, before any
//! request is served, and is reported by the binary through `anyhow`.
//!
//! # Example
//!
//! ```rust,ignore
//! let supplier = store
//!     .get(id)
//!     .await?
//!     .ok_or(SupplierError::Entity(EntityError::NotFound { id }))?;
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the suppliers service
#[derive(Debug)]
pub enum SupplierError {
    /// Lookup outcomes (not found, already exists)
    Entity(EntityError),

    /// Malformed request input
    Request(RequestError),

    /// Store failures
    Storage(StorageError),
}

impl fmt::Display for SupplierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierError::Entity(e) => write!(f, "{}", e),
            SupplierError::Request(e) => write!(f, "{}", e),
            SupplierError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SupplierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SupplierError::Entity(e) => Some(e),
            SupplierError::Request(e) => Some(e),
            SupplierError::Storage(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SupplierError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SupplierError::Entity(e) => e.status_code(),
            SupplierError::Request(e) => e.status_code(),
            SupplierError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SupplierError::Entity(e) => e.error_code(),
            SupplierError::Request(e) => e.error_code(),
            SupplierError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            SupplierError::Entity(EntityError::NotFound { id })
            | SupplierError::Entity(EntityError::AlreadyExists { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            SupplierError::Request(RequestError::InvalidEntityId { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            _ => None,
        }
    }

    /// Shorthand for the not-found error of a supplier id
    pub fn not_found(id: i64) -> Self {
        SupplierError::Entity(EntityError::NotFound { id })
    }
}

impl IntoResponse for SupplierError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to supplier lookups
#[derive(Debug)]
pub enum EntityError {
    /// No supplier with this id
    NotFound { id: i64 },

    /// A supplier with this id is already stored
    AlreadyExists { id: i64 },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { id } => write!(f, "supplier with id '{}' not found", id),
            EntityError::AlreadyExists { id } => {
                write!(f, "supplier with id '{}' already exists", id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
        }
    }
}

impl From<EntityError> for SupplierError {
    fn from(err: EntityError) -> Self {
        SupplierError::Entity(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors caused by malformed request input
#[derive(Debug)]
pub enum RequestError {
    /// Path identifier is not an integer
    InvalidEntityId { id: String },

    /// Request body could not be decoded
    InvalidBody { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidEntityId { id } => {
                write!(f, "Invalid supplier ID format: '{}'", id)
            }
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl From<RequestError> for SupplierError {
    fn from(err: RequestError) -> Self {
        SupplierError::Request(err)
    }
}

impl From<serde_json::Error> for SupplierError {
    fn from(err: serde_json::Error) -> Self {
        SupplierError::Request(RequestError::InvalidBody {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a supplier store
#[derive(Debug)]
pub enum StorageError {
    /// The store lock was poisoned by a panicking writer
    LockPoisoned { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { message } => {
                write!(f, "Storage lock poisoned: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for SupplierError {
    fn from(err: StorageError) -> Self {
        SupplierError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading the server configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: String, message: String },

    /// Config content is not valid YAML for `ServerConfig`
    Parse { message: String },

    /// Bind address is not a socket address
    InvalidBindAddress { address: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read config '{}': {}", path, message)
            }
            ConfigError::Parse { message } => write!(f, "Failed to parse config: {}", message),
            ConfigError::InvalidBindAddress { address } => {
                write!(f, "Invalid bind address: '{}'", address)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result alias used throughout the crate
pub type SupplierResult<T> = Result<T, SupplierError>;
