//! Pre-navigation login check.
//!
//! UX only: the guard keeps logged-out visitors off private pages, the API
//! still has to reject requests on its own.

use routine_client::SessionContext;
use tracing::warn;

use crate::routes::RouteTable;

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &["/login", "/register", "/home"];

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

#[derive(Clone)]
pub struct NavigationGuard {
    public_paths: &'static [&'static str],
    login_path: &'static str,
    session: SessionContext,
}

impl NavigationGuard {
    pub fn new(session: SessionContext) -> Self {
        Self {
            public_paths: PUBLIC_PATHS,
            login_path: LOGIN_PATH,
            session,
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(&path)
    }

    pub fn check(&self, path: &str) -> GuardDecision {
        if !self.is_public(path) && !self.session.is_logged_in() {
            GuardDecision::Redirect(self.login_path)
        } else {
            GuardDecision::Proceed
        }
    }

    /// Public paths that no route declares.
    pub fn undeclared_public_paths(&self, table: &RouteTable) -> Vec<&'static str> {
        self.public_paths
            .iter()
            .copied()
            .filter(|path| !table.declares(path))
            .collect()
    }

    pub fn warn_on_inconsistencies(&self, table: &RouteTable) {
        for path in self.undeclared_public_paths(table) {
            warn!("public path {path} has no matching route");
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
