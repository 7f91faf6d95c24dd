//! Client error types

use http::StatusCode;
use thiserror::Error;

use crate::request::ApiResponse;

/// What went wrong with a call through the API client.
#[derive(Debug, Error)]
pub enum ApiErrorKind {
    /// No response was received
    #[error("Request failed: {0}")]
    Network(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The server rejected the session (401)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The session is valid but not allowed here (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
}

impl ApiErrorKind {
    /// Create error kind from HTTP status code
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Error returned to every caller of the API client.
///
/// `redirect_pending` is set by the auth redirect interceptor when the failure
/// already triggered (or could have triggered) a navigation, so call sites can
/// skip their own error display.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    response: Option<ApiResponse>,
    pub redirect_pending: bool,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind) -> Self {
        Self {
            kind,
            response: None,
            redirect_pending: false,
        }
    }

    /// Failure with no response object at all.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network(message.into()))
    }

    /// Failure carrying the error response the server sent.
    pub fn from_response(response: ApiResponse) -> Self {
        let message = response
            .text()
            .filter(|body| !body.trim().is_empty())
            .unwrap_or_else(|| response.status.to_string());
        Self {
            kind: ApiErrorKind::from_status(response.status, message),
            response: Some(response),
            redirect_pending: false,
        }
    }

    pub fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.response.as_ref().map(|r| r.status)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ApiErrorKind::Serialization(e))
    }
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        Self::new(ApiErrorKind::Configuration(e))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url is required")]
    MissingBaseUrl,

    #[error("base url {0} is relative and no origin was given")]
    RelativeBaseUrl(String),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write session key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}
