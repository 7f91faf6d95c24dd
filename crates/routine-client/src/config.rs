//! API client configuration.
//!
//! A [`ClientConfig`] is fixed once built: there are no setters, and the API
//! client only ever reads it.

use http::{
    header::{self, HeaderName},
    HeaderMap, HeaderValue,
};
use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "ROUTINE_API_BASE_URL";

/// Used when neither the runtime nor the build environment names a base URL.
pub const DEFAULT_BASE_URL: &str = "/api";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Fetch credential mode applied to every request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialMode {
    Omit,
    #[default]
    SameOrigin,
    Include,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: Url,
    default_headers: HeaderMap,
    credentials: CredentialMode,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL from the environment, resolved against `origin` when relative.
    pub fn from_env(origin: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().base_url(base_url_from_env());
        if let Some(origin) = origin {
            builder = builder.origin(origin);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn credentials(&self) -> CredentialMode {
        self.credentials
    }

    /// Absolute URL for an API path such as `/routines/`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let joined = format!("{base}/{path}");
        Url::parse(&joined).map_err(|e| ConfigError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
    }
}

/// Runtime environment first, then the value baked in at build time.
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| option_env!("ROUTINE_API_BASE_URL").map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    origin: Option<String>,
    headers: Vec<(String, String)>,
    credentials: CredentialMode,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Origin that a relative base URL is resolved against
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Add or replace a default header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn credentials(mut self, mode: CredentialMode) -> Self {
        self.credentials = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let rawBase = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let baseUrl = match Url::parse(&rawBase) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = self
                    .origin
                    .ok_or_else(|| ConfigError::RelativeBaseUrl(rawBase.clone()))?;
                let originUrl = Url::parse(&origin).map_err(|e| ConfigError::InvalidUrl {
                    url: origin.clone(),
                    reason: e.to_string(),
                })?;
                originUrl.join(&rawBase).map_err(|e| ConfigError::InvalidUrl {
                    url: rawBase.clone(),
                    reason: e.to_string(),
                })?
            }
            Err(e) => {
                return Err(ConfigError::InvalidUrl {
                    url: rawBase,
                    reason: e.to_string(),
                })
            }
        };

        let mut defaultHeaders = default_headers();
        for (name, value) in self.headers {
            let headerName =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let headerValue =
                HeaderValue::from_str(&value).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            defaultHeaders.insert(headerName, headerValue);
        }

        Ok(ClientConfig {
            base_url: baseUrl,
            default_headers: defaultHeaders,
            credentials: self.credentials,
        })
    }
}

/// Headers every request starts with.
///
/// The access-control headers are response headers; sending them from the
/// browser has no effect on CORS.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, PUT, POST, DELETE, OPTIONS"),
    );
    headers
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
