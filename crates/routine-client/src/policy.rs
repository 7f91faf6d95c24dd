//! What to do when the API rejects the session.
//!
//! The response interceptor only classifies failures; the decision about where
//! to send the user lives in an [`AuthFailureHandler`], so it can be exercised
//! against a recording [`Navigator`] without a router.

use std::sync::Arc;

use url::form_urlencoded;

/// Login route used for redirect-back after a 401.
pub const AUTH_LOGIN_PATH: &str = "/auth/login";

/// Named route shown after a 403.
pub const FORBIDDEN_ROUTE: &str = "forbidden";

pub const REDIRECT_QUERY_KEY: &str = "redirect";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// 401
    Unauthenticated,
    /// 403
    Forbidden,
}

pub trait AuthFailureHandler: Send + Sync {
    fn on_auth_failure(&self, failure: AuthFailure);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    Path {
        path: String,
        query: Vec<(String, String)>,
    },
    Named(String),
}

impl NavigationTarget {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// `path?query` for path targets; named targets need a route table.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Path { path, query } => Some(with_query(path, query)),
            Self::Named(_) => None,
        }
    }
}

/// Snapshot of where the router currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentRoute {
    pub path: String,
    /// Path plus query string, as shown in the address bar.
    pub full_path: String,
    pub query: Vec<(String, String)>,
}

impl CurrentRoute {
    /// Build from a pathname and a `search` string (with or without `?`).
    pub fn from_location(pathname: &str, search: &str) -> Self {
        let rawQuery = search.trim_start_matches('?');
        let query: Vec<(String, String)> = form_urlencoded::parse(rawQuery.as_bytes())
            .into_owned()
            .collect();
        let fullPath = if rawQuery.is_empty() {
            pathname.to_owned()
        } else {
            format!("{pathname}?{rawQuery}")
        };
        Self {
            path: pathname.to_owned(),
            full_path: fullPath,
            query,
        }
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

pub trait Navigator: Send + Sync {
    fn current_route(&self) -> CurrentRoute;
    fn navigate(&self, target: NavigationTarget);
}

/// Query for the login redirect: keep an existing `redirect` value, otherwise
/// remember the current full path unless it already is the login page.
pub fn redirect_query(current: &CurrentRoute, login_path: &str) -> Vec<(String, String)> {
    if let Some(existing) = current
        .query_value(REDIRECT_QUERY_KEY)
        .filter(|v| !v.is_empty())
    {
        return vec![(REDIRECT_QUERY_KEY.to_owned(), existing.to_owned())];
    }
    if current.full_path != login_path {
        return vec![(REDIRECT_QUERY_KEY.to_owned(), current.full_path.clone())];
    }
    Vec::new()
}

/// Sends 401s to the login page and 403s to the forbidden route.
#[derive(Clone)]
pub struct RedirectPolicy {
    navigator: Arc<dyn Navigator>,
    login_path: String,
    forbidden_route: String,
}

impl RedirectPolicy {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            login_path: AUTH_LOGIN_PATH.to_owned(),
            forbidden_route: FORBIDDEN_ROUTE.to_owned(),
        }
    }

    pub fn target_for(&self, failure: AuthFailure) -> NavigationTarget {
        match failure {
            AuthFailure::Unauthenticated => {
                let current = self.navigator.current_route();
                NavigationTarget::Path {
                    path: self.login_path.clone(),
                    query: redirect_query(&current, &self.login_path),
                }
            }
            AuthFailure::Forbidden => NavigationTarget::Named(self.forbidden_route.clone()),
        }
    }
}

impl AuthFailureHandler for RedirectPolicy {
    fn on_auth_failure(&self, failure: AuthFailure) {
        let target = self.target_for(failure);
        tracing::warn!("auth failure {failure:?}, redirecting to {target:?}");
        self.navigator.navigate(target);
    }
}

fn with_query(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_owned();
    }
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    format!("{path}?{encoded}")
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
