use http::{header::HeaderName, HeaderMap, HeaderValue, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::CredentialMode;
use crate::error::{ApiError, ApiErrorKind};

/// A request as seen by the interceptors, before it is handed to the transport.
///
/// Default headers from the client configuration are already merged in, so an
/// interceptor checking for a header sees the same set the server will.
#[derive(Clone, Debug)]
pub struct PendingRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub credentials: CredentialMode,
}

impl PendingRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            credentials: CredentialMode::default(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let headerName = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::new(ApiErrorKind::InvalidRequest(format!("{name}: {e}"))))?;
        let headerValue = HeaderValue::from_str(value)
            .map_err(|e| ApiError::new(ApiErrorKind::InvalidRequest(format!("{name}: {e}"))))?;
        self.headers.insert(headerName, headerValue);
        Ok(self)
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// A response that made it back from the server.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
