use super::*;

#[test]
fn navigate_parks_target_until_taken() {
    let navigator = SignalNavigator::new();
    navigator.navigate(NavigationTarget::Named("forbidden".to_owned()));

    assert_eq!(
        navigator.take_pending(),
        Some(NavigationTarget::Named("forbidden".to_owned()))
    );
    assert_eq!(navigator.take_pending(), None);
}

#[test]
fn later_navigation_replaces_earlier() {
    let navigator = SignalNavigator::new();
    navigator.navigate(NavigationTarget::path("/auth/login"));
    navigator.navigate(NavigationTarget::Named("forbidden".to_owned()));

    assert_eq!(
        navigator.take_pending(),
        Some(NavigationTarget::Named("forbidden".to_owned()))
    );
}

#[test]
fn current_route_reflects_last_update() {
    let navigator = SignalNavigator::new();
    navigator.set_current(CurrentRoute::from_location("/posts", "?redirect=%2Ftable"));

    let current = navigator.current_route();
    assert_eq!(current.full_path, "/posts?redirect=%2Ftable");
    assert_eq!(current.query_value("redirect"), Some("/table"));
}

#[test]
fn named_targets_resolve_through_route_table() {
    let table = RouteTable::default();
    assert_eq!(
        resolve_target(&table, &NavigationTarget::Named("forbidden".to_owned())).as_deref(),
        Some("/forbidden")
    );
    assert_eq!(
        resolve_target(&table, &NavigationTarget::Named("nope".to_owned())),
        None
    );
}

#[test]
fn path_targets_carry_their_query() {
    let table = RouteTable::default();
    let target = NavigationTarget::Path {
        path: "/auth/login".to_owned(),
        query: vec![("redirect".to_owned(), "/profile".to_owned())],
    };
    assert_eq!(
        resolve_target(&table, &target).as_deref(),
        Some("/auth/login?redirect=%2Fprofile")
    );
}

#[test]
fn default_navigator_starts_idle() {
    let navigator = SignalNavigator::default();

    assert_eq!(navigator.take_pending(), None);
    assert_eq!(navigator.current_route(), CurrentRoute::default());
}
