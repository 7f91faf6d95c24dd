use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::store::app::AppMutation;
use crate::store::i18n::I18nMutation;
use crate::store::{getters, Store};

const LINKS: &[(&str, &str, &str)] = &[
    ("/", "nav.home", "\u{25A3}"),
    ("/table", "nav.table", "\u{2630}"),
    ("/reference", "nav.reference", "\u{2637}"),
    ("/posts", "nav.posts", "\u{270E}"),
    ("/docker-compose", "nav.docker_compose", "\u{2338}"),
    ("/profile", "nav.profile", "\u{263A}"),
    ("/about", "nav.about", "\u{2139}"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let store = expect_context::<Store>();
    let pathname = use_location().pathname;

    let toggleStore = store.clone();
    let onToggle = move |_| toggleStore.commit(AppMutation::ToggleSidebar);

    let languageStore = store.clone();
    let onLanguage = move |_| {
        let next = if languageStore.get_untracked(getters::current_locale) == "es" {
            "en"
        } else {
            "es"
        };
        languageStore.commit(I18nMutation::SetLocale(next.to_owned()));
    };

    let openStore = store.clone();
    let navClass = move || {
        if openStore.get(getters::sidebar_opened) {
            "nav-sidebar"
        } else {
            "nav-sidebar collapsed"
        }
    };

    let titleStore = store.clone();
    let busyStore = store.clone();
    let hintStore = store.clone();
    let languageLabelStore = store.clone();

    view! {
        <nav class=navClass>
            <div class="nav-brand">
                <div class="brand-icon">"R"</div>
                <span class="brand-text">{move || titleStore.translate("app.title")}</span>
                <Show when=move || busyStore.get(getters::is_loading)>
                    <div class="spinner"></div>
                </Show>
                <button
                    class="btn btn-ghost btn-sm"
                    title=move || hintStore.translate("nav.toggle_sidebar")
                    on:click=onToggle
                >
                    "\u{2261}"
                </button>
            </div>
            <ul class="nav-links">
                {LINKS
                    .iter()
                    .map(|&(href, key, icon)| {
                        let linkStore = store.clone();
                        let isActive = move || pathname.get() == href;
                        view! {
                            <li class=move || {
                                if isActive() { "nav-item active" } else { "nav-item" }
                            }>
                                <a href=href>
                                    <span class="nav-icon">{icon}</span>
                                    <span>{move || linkStore.translate(key)}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="nav-footer">
                <button class="btn btn-ghost btn-sm" on:click=onLanguage>
                    {move || languageLabelStore.translate("nav.language")}
                </button>
            </div>
        </nav>
    }
}
