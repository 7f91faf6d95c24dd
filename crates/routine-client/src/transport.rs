use std::future::Future;

use thiserror::Error;

use crate::error::ApiError;
use crate::request::{ApiResponse, PendingRequest};

/// No response came back: DNS, connection, CORS rejection, aborted fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Moves a finished [`PendingRequest`] over the wire.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
pub trait Transport: Send + Sync + 'static {
    fn send(
        &self,
        request: PendingRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}

/// reqwest-backed transport; uses fetch on wasm32.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::network(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }

    fn prepare(&self, request: PendingRequest) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        #[cfg(target_arch = "wasm32")]
        {
            use crate::config::CredentialMode;
            builder = match request.credentials {
                CredentialMode::Omit => builder.fetch_credentials_omit(),
                CredentialMode::SameOrigin => builder.fetch_credentials_same_origin(),
                CredentialMode::Include => builder.fetch_credentials_include(),
            };
        }

        builder
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: PendingRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let builder = self.prepare(request);
        async move {
            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(ApiResponse {
                status,
                headers,
                body: body.to_vec(),
            })
        }
    }
}
