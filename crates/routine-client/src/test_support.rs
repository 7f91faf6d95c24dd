use std::future::Future;
use std::sync::{Arc, Mutex};

use http::StatusCode;

use crate::policy::{CurrentRoute, NavigationTarget, Navigator};
use crate::request::{ApiResponse, PendingRequest};
use crate::transport::{Transport, TransportError};

/// Navigator that records every navigation instead of performing it.
#[derive(Default)]
pub struct RecordingNavigator {
    pub current: Mutex<CurrentRoute>,
    pub visited: Mutex<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn at(pathname: &str, search: &str) -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(CurrentRoute::from_location(pathname, search)),
            visited: Mutex::new(Vec::new()),
        })
    }

    pub fn visited(&self) -> Vec<NavigationTarget> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_route(&self) -> CurrentRoute {
        self.current.lock().unwrap().clone()
    }

    fn navigate(&self, target: NavigationTarget) {
        self.visited.lock().unwrap().push(target);
    }
}

/// Transport answering every request with a canned outcome.
pub struct StubTransport {
    outcome: Result<(u16, String), String>,
    pub seen: Mutex<Vec<PendingRequest>>,
}

impl StubTransport {
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok((status, body.to_owned())),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            outcome: Err("connection refused".to_owned()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> PendingRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

impl Transport for StubTransport {
    fn send(
        &self,
        request: PendingRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.seen.lock().unwrap().push(request);
        let outcome = self.outcome.clone();
        async move {
            match outcome {
                Ok((status, body)) => Ok(ApiResponse::new(
                    StatusCode::from_u16(status).unwrap(),
                    body.into_bytes(),
                )),
                Err(reason) => Err(TransportError(reason)),
            }
        }
    }
}
