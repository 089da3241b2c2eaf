//! Typed error handling for the bills page
//!
//! # Error Categories
//!
//! - [`StoreError`]: the bills backend (or its mock) failed to answer
//! - [`SessionError`]: the session value is missing or unreadable
//! - [`NavigationError`]: a navigation could not be started or settled
//! - [`DomError`]: a document query or mutation did not find its target
//! - [`WaitError`]: a bounded wait expired before its condition held
//!
//! [`BilledError`] wraps all of them and maps each category to an HTTP status
//! for the preview server.
//!
//! # Example
//!
//! ```rust,ignore
//! match router.on_navigate(ROUTES_PATH.bills) {
//!     Ok(pending) => pending.settled().await?,
//!     Err(NavigationError::Unauthorized { reason }) => println!("login first: {reason}"),
//!     Err(e) => return Err(e.into()),
//! };
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Failure reported by the bills store
///
/// The message is shown verbatim in place of the bills list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
    pub status: Option<u16>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Error the backend reports for an HTTP status (`Erreur 404`, `Erreur 500`, ...)
    pub fn http(status: u16) -> Self {
        Self {
            message: format!("Erreur {status}"),
            status: Some(status),
        }
    }
}

/// Errors related to the `"user"` session value
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no user is stored in the session")]
    Missing,

    #[error("session user is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("session storage is unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by `on_navigate` and pending navigations
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("unknown route: {path}")]
    UnknownRoute { path: String },

    #[error("access denied: {reason}")]
    Unauthorized { reason: String },

    #[error("navigation requires a running tokio runtime")]
    NoRuntime,

    #[error("navigation task failed: {0}")]
    TaskFailed(String),
}

/// Errors raised while querying or mutating a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element found for {query}")]
    NotFound { query: String },

    #[error("found {count} elements for {query}, expected exactly one")]
    MultipleFound { query: String, count: usize },

    #[error("unsupported selector: {selector}")]
    UnsupportedSelector { selector: String },

    #[error("element <{tag}> has no attribute {attribute}")]
    MissingAttribute { tag: String, attribute: String },
}

/// A bounded wait gave up
#[derive(Debug, Error)]
#[error("condition not met within {timeout_ms}ms: {last_error}")]
pub struct WaitError {
    pub timeout_ms: u64,
    pub last_error: String,
}

/// Umbrella error for the crate
#[derive(Debug, Error)]
pub enum BilledError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Wait(#[from] WaitError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl BilledError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BilledError::Store(e) => e
                .status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            BilledError::Session(_) => StatusCode::UNAUTHORIZED,
            BilledError::Navigation(e) => match e {
                NavigationError::UnknownRoute { .. } => StatusCode::NOT_FOUND,
                NavigationError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
                NavigationError::NoRuntime | NavigationError::TaskFailed(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            BilledError::Dom(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BilledError::Wait(_) => StatusCode::GATEWAY_TIMEOUT,
            BilledError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BilledError::Store(_) => "STORE_ERROR",
            BilledError::Session(_) => "SESSION_ERROR",
            BilledError::Navigation(NavigationError::UnknownRoute { .. }) => "UNKNOWN_ROUTE",
            BilledError::Navigation(NavigationError::Unauthorized { .. }) => "UNAUTHORIZED",
            BilledError::Navigation(_) => "NAVIGATION_ERROR",
            BilledError::Dom(_) => "DOM_ERROR",
            BilledError::Wait(_) => "WAIT_TIMEOUT",
            BilledError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for BilledError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
