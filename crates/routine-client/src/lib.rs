#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod policy;
pub mod request;
pub mod session;
pub mod tracker;
pub mod transport;

pub use client::{create_api, create_api_with, ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, CredentialMode};
pub use error::{ApiError, ApiErrorKind, ConfigError, SessionError};
pub use interceptor::{
    AuthRedirectInterceptor, BearerTokenInterceptor, RequestInterceptor, ResponseInterceptor,
};
pub use policy::{
    AuthFailure, AuthFailureHandler, CurrentRoute, NavigationTarget, Navigator, RedirectPolicy,
};
pub use request::{ApiResponse, PendingRequest};
pub use session::{MemorySessionStore, SessionContext, SessionKeys, SessionStore};
pub use transport::{ReqwestTransport, Transport, TransportError};

#[cfg(test)]
mod test_support;
