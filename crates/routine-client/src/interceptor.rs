//! Request and response interceptors.
//!
//! Request interceptors run in registration order before the request is sent;
//! response interceptors run in registration order once it returns. A response
//! interceptor can annotate an error but never turn it back into a success.

use std::sync::Arc;

use http::{header, HeaderValue, StatusCode};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::policy::{AuthFailure, AuthFailureHandler};
use crate::request::{ApiResponse, PendingRequest};
use crate::session::SessionContext;

pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: &mut PendingRequest);
}

pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, _response: &mut ApiResponse) {}

    fn on_error(&self, error: &mut ApiError);
}

/// Adds `Authorization: Bearer <token>` when the request has no
/// `Authorization` header and the session holds a token.
pub struct BearerTokenInterceptor {
    session: SessionContext,
}

impl BearerTokenInterceptor {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerTokenInterceptor {
    fn on_request(&self, request: &mut PendingRequest) {
        if request.headers.contains_key(header::AUTHORIZATION) {
            return;
        }
        let Some(token) = self.session.bearer_token() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(header::AUTHORIZATION, value);
            }
            Err(e) => warn!("stored bearer token is not a valid header value: {e}"),
        }
    }
}

/// Flags network failures, 401s and 403s as `redirect_pending` and hands
/// 401/403 to the auth failure handler.
pub struct AuthRedirectInterceptor {
    handler: Arc<dyn AuthFailureHandler>,
}

impl AuthRedirectInterceptor {
    pub fn new(handler: Arc<dyn AuthFailureHandler>) -> Self {
        Self { handler }
    }
}

impl ResponseInterceptor for AuthRedirectInterceptor {
    fn on_error(&self, error: &mut ApiError) {
        let failure = match error.status() {
            None => None,
            Some(StatusCode::UNAUTHORIZED) => Some(AuthFailure::Unauthenticated),
            Some(StatusCode::FORBIDDEN) => Some(AuthFailure::Forbidden),
            Some(_) => return,
        };

        error.redirect_pending = true;

        match failure {
            Some(failure) => self.handler.on_auth_failure(failure),
            None => debug!("request failed without a response: {error}"),
        }
    }
}

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;
