//! Bridges the API client's redirect policy to the Leptos router.
//!
//! The client cannot call `use_navigate` itself (it may run outside any
//! component), so navigation requests are parked in a signal and performed by
//! [`NavigationBridge`], which lives inside the `<Router>`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use routine_client::{CurrentRoute, NavigationTarget, Navigator};
use tracing::warn;

use crate::routes::RouteTable;

#[derive(Clone)]
pub struct SignalNavigator {
    current: ArcRwSignal<CurrentRoute>,
    pending: ArcRwSignal<Option<NavigationTarget>>,
}

impl Default for SignalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalNavigator {
    pub fn new() -> Self {
        Self {
            current: ArcRwSignal::new(CurrentRoute::default()),
            pending: ArcRwSignal::new(None),
        }
    }

    pub fn set_current(&self, route: CurrentRoute) {
        self.current.set(route);
    }

    pub fn pending(&self) -> ArcRwSignal<Option<NavigationTarget>> {
        self.pending.clone()
    }

    /// Remove and return the parked navigation, if any.
    pub fn take_pending(&self) -> Option<NavigationTarget> {
        let target = self.pending.get_untracked();
        if target.is_some() {
            self.pending.set(None);
        }
        target
    }
}

impl Navigator for SignalNavigator {
    fn current_route(&self) -> CurrentRoute {
        self.current.get_untracked()
    }

    fn navigate(&self, target: NavigationTarget) {
        self.pending.set(Some(target));
    }
}

/// Turn a navigation target into an href using the route table for names.
pub fn resolve_target(table: &RouteTable, target: &NavigationTarget) -> Option<String> {
    match target {
        NavigationTarget::Named(name) => table.path_for_name(name).map(str::to_owned),
        NavigationTarget::Path { .. } => target.href(),
    }
}

/// Keeps the navigator's view of the current route in sync and performs the
/// navigations it parks.
#[component]
pub fn NavigationBridge() -> impl IntoView {
    let navigator = expect_context::<SignalNavigator>();
    let location = use_location();
    let navigate = use_navigate();
    let table = RouteTable::default();

    let trackingNavigator = navigator.clone();
    Effect::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        trackingNavigator.set_current(CurrentRoute::from_location(&pathname, &search));
    });

    let pending = navigator.pending();
    Effect::new(move |_| {
        if pending.get().is_none() {
            return;
        }
        let Some(target) = navigator.take_pending() else {
            return;
        };
        match resolve_target(&table, &target) {
            Some(href) => navigate(&href, Default::default()),
            None => warn!("no route for navigation target {target:?}"),
        }
    });
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;
