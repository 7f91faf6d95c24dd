use super::*;
use crate::policy::{NavigationTarget, RedirectPolicy};
use crate::test_support::RecordingNavigator;
use http::Method;
use url::Url;

fn pending() -> PendingRequest {
    PendingRequest::new(
        Method::GET,
        Url::parse("https://tracker.example.com/api/routines/").unwrap(),
    )
}

fn interceptor_at(
    pathname: &str,
    search: &str,
) -> (AuthRedirectInterceptor, Arc<RecordingNavigator>) {
    let navigator = RecordingNavigator::at(pathname, search);
    let policy = RedirectPolicy::new(navigator.clone());
    (AuthRedirectInterceptor::new(Arc::new(policy)), navigator)
}

fn session_with_token(token: &str) -> SessionContext {
    let session = SessionContext::in_memory();
    session.sign_in("ana", token).unwrap();
    session
}

fn status_error(status: u16) -> ApiError {
    ApiError::from_response(ApiResponse::new(StatusCode::from_u16(status).unwrap(), "{}"))
}

#[test]
fn bearer_token_is_attached_when_missing() {
    let interceptor = BearerTokenInterceptor::new(session_with_token("tok-9"));
    let mut request = pending();

    interceptor.on_request(&mut request);

    assert_eq!(request.headers[header::AUTHORIZATION], "Bearer tok-9");
}

#[test]
fn existing_authorization_header_is_left_alone() {
    let interceptor = BearerTokenInterceptor::new(session_with_token("tok-9"));
    let mut request = pending().header("Authorization", "Token abc").unwrap();

    interceptor.on_request(&mut request);

    assert_eq!(request.headers[header::AUTHORIZATION], "Token abc");
}

#[test]
fn no_token_means_no_header() {
    let interceptor = BearerTokenInterceptor::new(SessionContext::in_memory());
    let mut request = pending();

    interceptor.on_request(&mut request);

    assert!(!request.headers.contains_key(header::AUTHORIZATION));
}

#[test]
fn unauthorized_flags_and_redirects_to_login() {
    let (interceptor, navigator) = interceptor_at("/profile", "");
    let mut error = status_error(401);

    interceptor.on_error(&mut error);

    assert!(error.redirect_pending);
    assert_eq!(
        navigator.visited(),
        vec![NavigationTarget::Path {
            path: "/auth/login".to_owned(),
            query: vec![("redirect".to_owned(), "/profile".to_owned())],
        }]
    );
}

#[test]
fn unauthorized_keeps_existing_redirect_query() {
    let (interceptor, navigator) = interceptor_at("/auth/login", "?redirect=%2Fposts");
    let mut error = status_error(401);

    interceptor.on_error(&mut error);

    assert_eq!(
        navigator.visited(),
        vec![NavigationTarget::Path {
            path: "/auth/login".to_owned(),
            query: vec![("redirect".to_owned(), "/posts".to_owned())],
        }]
    );
}

#[test]
fn forbidden_flags_and_goes_to_forbidden_route() {
    let (interceptor, navigator) = interceptor_at("/table", "");
    let mut error = status_error(403);

    interceptor.on_error(&mut error);

    assert!(error.redirect_pending);
    assert_eq!(
        navigator.visited(),
        vec![NavigationTarget::Named("forbidden".to_owned())]
    );
}

#[test]
fn network_failure_flags_without_navigating() {
    let (interceptor, navigator) = interceptor_at("/table", "");
    let mut error = ApiError::network("connection refused");

    interceptor.on_error(&mut error);

    assert!(error.redirect_pending);
    assert!(navigator.visited().is_empty());
}

#[test]
fn other_statuses_are_untouched() {
    let (interceptor, navigator) = interceptor_at("/table", "");
    for status in [400, 404, 500, 502] {
        let mut error = status_error(status);
        interceptor.on_error(&mut error);
        assert!(!error.redirect_pending, "status {status}");
    }
    assert!(navigator.visited().is_empty());
}
