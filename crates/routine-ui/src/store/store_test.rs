use super::*;
use crate::navigation::SignalNavigator;

fn store() -> Store {
    create_store(
        SessionContext::in_memory(),
        Arc::new(SignalNavigator::new()),
        Some("http://localhost:3000"),
    )
    .unwrap()
}

#[test]
fn assembled_store_is_strict_and_has_api() {
    let store = store();
    assert!(store.is_strict());
    assert!(store.api().config().base_url().as_str().starts_with("http"));
}

#[test]
fn i18n_plugin_installs_catalogs_through_commits() {
    let store = store();

    assert_eq!(store.get_untracked(getters::current_locale), "en");
    assert_eq!(
        store.get_untracked(getters::available_locales),
        vec!["en".to_owned(), "es".to_owned()]
    );
    let names: Vec<_> = store.commits().iter().map(|c| c.mutation).collect();
    assert_eq!(
        names,
        vec![
            "i18n/ADD_LOCALE",
            "i18n/ADD_LOCALE",
            "i18n/SET_FALLBACK_LOCALE",
            "i18n/SET_LOCALE",
        ]
    );
}

#[test]
fn commits_are_numbered_in_order() {
    let store = store();
    let before = store.last_commit_seq();

    store.commit(AppMutation::ToggleSidebar);
    store.commit(AppMutation::SetLoading(true));

    let commits = store.commits();
    let tail = &commits[commits.len() - 2..];
    assert_eq!(
        tail,
        &[
            CommitRecord {
                seq: before + 1,
                mutation: "app/TOGGLE_SIDEBAR",
            },
            CommitRecord {
                seq: before + 2,
                mutation: "app/SET_LOADING",
            },
        ]
    );
}

#[test]
fn app_mutations_update_getters() {
    let store = store();
    assert!(store.get_untracked(getters::sidebar_opened));

    store.commit(AppMutation::ToggleSidebar);
    store.commit(AppMutation::SetLoading(true));
    store.commit(AppMutation::SetPageTitle("Routines".to_owned()));

    assert!(!store.get_untracked(getters::sidebar_opened));
    assert!(store.get_untracked(getters::is_loading));
    assert_eq!(store.get_untracked(getters::page_title), "Routines");
}

#[test]
fn translate_uses_current_locale_and_interpolates() {
    let store = store();
    assert_eq!(
        store.translate_with("home.welcome", &[("name", "Ana")]),
        "Welcome back, Ana"
    );

    store.commit(I18nMutation::SetLocale("es".to_owned()));

    assert_eq!(
        store.translate_with("home.welcome", &[("name", "Ana")]),
        "Hola de nuevo, Ana"
    );
}

#[test]
fn missing_translation_falls_back_then_returns_key() {
    let store = store();
    store.commit(I18nMutation::SetLocale("es".to_owned()));

    assert_eq!(store.translate("docker.title"), "Docker Compose");
    assert_eq!(store.translate("no.such.key"), "no.such.key");
}

#[test]
fn unknown_locale_still_translates_via_fallback() {
    let store = store();
    store.commit(I18nMutation::SetLocale("fr".to_owned()));

    assert_eq!(store.get_untracked(getters::current_locale), "fr");
    assert_eq!(store.translate("nav.home"), "Home");
}

#[test]
fn add_locale_merges_into_existing_catalog() {
    let store = store();
    store.commit(I18nMutation::AddLocale {
        locale: "en".to_owned(),
        translations: [("extra.key".to_owned(), "Extra".to_owned())]
            .into_iter()
            .collect(),
    });

    assert_eq!(store.translate("extra.key"), "Extra");
    assert_eq!(store.translate("nav.home"), "Home");
}

#[test]
fn commit_log_keeps_only_recent_records() {
    let store = store();

    for i in 0..10_000 {
        store.commit(AppMutation::SetPageTitle(format!("page.{i}")));
    }

    let commits = store.commits();
    assert_eq!(commits.len(), COMMIT_LOG_LIMIT);
    assert_eq!(store.last_commit_seq(), 10_004);
    assert_eq!(commits.last().map(|c| c.seq), Some(10_004));
    assert_eq!(
        commits.first().map(|c| c.seq),
        Some(10_004 - COMMIT_LOG_LIMIT as u64 + 1)
    );
    assert_eq!(store.get_untracked(getters::page_title), "page.9999");
}

#[test]
fn non_strict_store_keeps_no_log() {
    let store = Store::new(store().api().clone(), false);

    store.commit(AppMutation::ToggleSidebar);

    assert!(store.commits().is_empty());
    assert!(!store.get_untracked(getters::sidebar_opened));
}
