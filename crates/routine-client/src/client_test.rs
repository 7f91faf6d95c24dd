use super::*;
use crate::policy::{NavigationTarget, RedirectPolicy};
use crate::test_support::{RecordingNavigator, StubTransport};
use crate::ApiErrorKind;
use http::header;
use std::sync::Mutex;

fn config() -> ClientConfig {
    ClientConfig::builder()
        .base_url("https://tracker.example.com/api")
        .build()
        .unwrap()
}

fn signed_in_session(token: &str) -> SessionContext {
    let session = SessionContext::in_memory();
    session.sign_in("ana", token).unwrap();
    session
}

fn client_with(
    transport: StubTransport,
    session: SessionContext,
    navigator: Arc<RecordingNavigator>,
) -> ApiClient<StubTransport> {
    create_api_with(
        config(),
        transport,
        session,
        Arc::new(RedirectPolicy::new(navigator)),
    )
}

#[tokio::test]
async fn success_passes_through_with_bearer_and_defaults() {
    let navigator = RecordingNavigator::at("/table", "");
    let api = client_with(
        StubTransport::status(200, r#"{"ok": true}"#),
        signed_in_session("tok-1"),
        navigator.clone(),
    );

    let request = api.request(Method::GET, "/routines/").unwrap();
    let response = api.send(request).await.unwrap();

    assert_eq!(response.status, http::StatusCode::OK);
    let sent = api.transport().last_request();
    assert_eq!(sent.url.as_str(), "https://tracker.example.com/api/routines/");
    assert_eq!(sent.headers[header::AUTHORIZATION], "Bearer tok-1");
    assert_eq!(
        sent.headers[header::CONTENT_TYPE],
        "application/json; charset=UTF-8"
    );
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn unauthorized_is_rejected_after_redirect() {
    let navigator = RecordingNavigator::at("/posts", "?page=2");
    let api = client_with(
        StubTransport::status(401, r#"{"detail": "expired"}"#),
        signed_in_session("tok-1"),
        navigator.clone(),
    );

    let request = api.request(Method::GET, "/snippets/").unwrap();
    let error = api.send(request).await.unwrap_err();

    assert!(error.redirect_pending);
    assert!(matches!(error.kind, ApiErrorKind::AuthenticationFailed(_)));
    assert_eq!(error.status(), Some(http::StatusCode::UNAUTHORIZED));
    assert_eq!(
        navigator.visited(),
        vec![NavigationTarget::Path {
            path: "/auth/login".to_owned(),
            query: vec![("redirect".to_owned(), "/posts?page=2".to_owned())],
        }]
    );
}

#[tokio::test]
async fn forbidden_is_rejected_after_redirect() {
    let navigator = RecordingNavigator::at("/table", "");
    let api = client_with(
        StubTransport::status(403, ""),
        signed_in_session("tok-1"),
        navigator.clone(),
    );

    let request = api.request(Method::DELETE, "/routines/4/").unwrap();
    let error = api.send(request).await.unwrap_err();

    assert!(error.redirect_pending);
    assert!(matches!(error.kind, ApiErrorKind::Forbidden(_)));
    assert_eq!(
        navigator.visited(),
        vec![NavigationTarget::Named("forbidden".to_owned())]
    );
}

#[tokio::test]
async fn network_failure_is_flagged_and_rejected() {
    let navigator = RecordingNavigator::at("/table", "");
    let api = client_with(
        StubTransport::unreachable(),
        SessionContext::in_memory(),
        navigator.clone(),
    );

    let request = api.request(Method::GET, "/routines/").unwrap();
    let error = api.send(request).await.unwrap_err();

    assert!(error.redirect_pending);
    assert!(error.response().is_none());
    assert!(matches!(error.kind, ApiErrorKind::Network(_)));
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn server_error_is_rejected_without_flag() {
    let navigator = RecordingNavigator::at("/table", "");
    let api = client_with(
        StubTransport::status(500, "boom"),
        SessionContext::in_memory(),
        navigator.clone(),
    );

    let request = api.request(Method::GET, "/routines/").unwrap();
    let error = api.send(request).await.unwrap_err();

    assert!(!error.redirect_pending);
    match error.kind {
        ApiErrorKind::ServerError { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        ref other => panic!("unexpected error kind: {other:?}"),
    }
    assert!(navigator.visited().is_empty());
}

#[derive(Default)]
struct OrderLog(Arc<Mutex<Vec<&'static str>>>);

struct Tag(&'static str, Arc<Mutex<Vec<&'static str>>>);

impl RequestInterceptor for Tag {
    fn on_request(&self, _request: &mut PendingRequest) {
        self.1.lock().unwrap().push(self.0);
    }
}

impl ResponseInterceptor for Tag {
    fn on_error(&self, _error: &mut ApiError) {
        self.1.lock().unwrap().push(self.0);
    }
}

#[tokio::test]
async fn interceptors_run_in_registration_order() {
    let log = OrderLog::default();
    let api = ApiClient::builder(config(), StubTransport::status(418, ""))
        .request_interceptor(Tag("req-1", log.0.clone()))
        .request_interceptor(Tag("req-2", log.0.clone()))
        .response_interceptor(Tag("res-1", log.0.clone()))
        .response_interceptor(Tag("res-2", log.0.clone()))
        .build();

    let request = api.request(Method::GET, "/routines/").unwrap();
    let _ = api.send(request).await;

    assert_eq!(
        *log.0.lock().unwrap(),
        vec!["req-1", "req-2", "res-1", "res-2"]
    );
}

#[tokio::test]
async fn clones_share_the_interceptor_chain() {
    let navigator = RecordingNavigator::at("/about", "");
    let api = client_with(
        StubTransport::status(403, ""),
        SessionContext::in_memory(),
        navigator.clone(),
    );
    let copy = api.clone();

    let request = copy.request(Method::GET, "/users/").unwrap();
    let error = copy.send(request).await.unwrap_err();

    assert!(error.redirect_pending);
    assert_eq!(navigator.visited().len(), 1);
}
