//! Routine tracker API client

use std::sync::Arc;

use http::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::interceptor::{
    AuthRedirectInterceptor, BearerTokenInterceptor, RequestInterceptor, ResponseInterceptor,
};
use crate::policy::AuthFailureHandler;
use crate::request::{ApiResponse, PendingRequest};
use crate::session::SessionContext;
use crate::transport::{ReqwestTransport, Transport};

struct ClientInner<T> {
    transport: T,
    config: ClientConfig,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

/// Shared API client. Cloning is cheap and every clone runs the same
/// interceptor chain.
pub struct ApiClient<T: Transport = ReqwestTransport> {
    inner: Arc<ClientInner<T>>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a new client builder
    pub fn builder(config: ClientConfig, transport: T) -> ApiClientBuilder<T> {
        ApiClientBuilder {
            transport,
            config,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Start a request to `path` with the default headers applied.
    pub fn request(&self, method: Method, path: &str) -> Result<PendingRequest, ApiError> {
        let config = &self.inner.config;
        let url = config.endpoint(path)?;
        let mut request = PendingRequest::new(method, url);
        request.headers = config.default_headers().clone();
        request.credentials = config.credentials();
        Ok(request)
    }

    /// Run the interceptor chain around a single send.
    ///
    /// Any failure is returned as `Err` after the response interceptors have
    /// seen it.
    pub async fn send(&self, mut request: PendingRequest) -> Result<ApiResponse, ApiError> {
        for interceptor in &self.inner.request_interceptors {
            interceptor.on_request(&mut request);
        }

        let method = request.method.clone();
        let url = request.url.to_string();
        debug!("{method} {url}");

        let mut error = match self.inner.transport.send(request).await {
            Ok(mut response) if response.status.is_success() => {
                for interceptor in &self.inner.response_interceptors {
                    interceptor.on_response(&mut response);
                }
                return Ok(response);
            }
            Ok(response) => ApiError::from_response(response),
            Err(e) => ApiError::network(e.0),
        };

        debug!("{method} {url} failed: {error}");
        for interceptor in &self.inner.response_interceptors {
            interceptor.on_error(&mut error);
        }
        Err(error)
    }

    /// Send and decode a JSON body.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        request: PendingRequest,
    ) -> Result<R, ApiError> {
        let response = self.send(request).await?;
        response.json()
    }
}

/// Builder for ApiClient
pub struct ApiClientBuilder<T: Transport> {
    transport: T,
    config: ClientConfig,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl<T: Transport> ApiClientBuilder<T> {
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Build the client
    pub fn build(self) -> ApiClient<T> {
        ApiClient {
            inner: Arc::new(ClientInner {
                transport: self.transport,
                config: self.config,
                request_interceptors: self.request_interceptors,
                response_interceptors: self.response_interceptors,
            }),
        }
    }
}

/// The application's API client: bearer token injection on the way out,
/// auth failure redirects on the way back.
pub fn create_api(
    config: ClientConfig,
    session: SessionContext,
    failures: Arc<dyn AuthFailureHandler>,
) -> Result<ApiClient, ApiError> {
    let transport = ReqwestTransport::new()?;
    Ok(create_api_with(config, transport, session, failures))
}

/// [`create_api`] over any transport.
pub fn create_api_with<T: Transport>(
    config: ClientConfig,
    transport: T,
    session: SessionContext,
    failures: Arc<dyn AuthFailureHandler>,
) -> ApiClient<T> {
    ApiClient::builder(config, transport)
        .request_interceptor(BearerTokenInterceptor::new(session))
        .response_interceptor(AuthRedirectInterceptor::new(failures))
        .build()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
