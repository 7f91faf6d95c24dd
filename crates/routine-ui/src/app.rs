use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
    StaticSegment, WildcardSegment,
};
use tracing::error;

use crate::components::card::Loading;
use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::guard::{GuardDecision, NavigationGuard};
use crate::navigation::{NavigationBridge, SignalNavigator};
use crate::pages::not_found::NotFoundPage;
use crate::pages::render_page;
use crate::routes::{Page, RouteTable};
use crate::storage::{page_origin, session_context};
use crate::store::app::AppMutation;
use crate::store::{create_store, getters, Store};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = session_context();
    let navigator = SignalNavigator::new();
    let origin = page_origin();

    let store = match create_store(
        session.clone(),
        Arc::new(navigator.clone()),
        origin.as_deref(),
    ) {
        Ok(store) => store,
        Err(e) => {
            error!("failed to build the application store: {e}");
            return view! {
                <Stylesheet id="leptos" href="/pkg/routine-console.css" />
                <div class="login-error">{format!("Configuration error: {e}")}</div>
            }
            .into_any();
        }
    };

    let guard = NavigationGuard::new(session.clone());
    guard.warn_on_inconsistencies(&RouteTable::default());

    let titleStore = store.clone();
    let title = move || {
        let app = titleStore.translate("app.title");
        match titleStore.get(getters::page_title) {
            key if key.is_empty() => app,
            key => format!("{} \u{00B7} {app}", titleStore.translate(&key)),
        }
    };
    provide_context(store);
    provide_context(guard);
    provide_context(session);
    provide_context(navigator);

    view! {
        <Stylesheet id="leptos" href="/pkg/routine-console.css" />
        <Title text=title />
        <ToastProvider>
            <Router>
                <NavigationBridge />
                <Routes fallback=|| view! { <NotFoundPage /> }.into_any()>
                    <Route path=StaticSegment("") view=RoutedView />
                    <Route path=WildcardSegment("any") view=RoutedView />
                </Routes>
            </Router>
        </ToastProvider>
    }
    .into_any()
}

/// Runs the guard for the current path, then renders whatever the route table
/// binds to it.
///
/// Private pages only render once the guard approved the path on the client;
/// the server never sees the browser session, so it renders the loading shell
/// for them.
#[component]
fn RoutedView() -> impl IntoView {
    let store = expect_context::<Store>();
    let guard = expect_context::<NavigationGuard>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let table = RouteTable::default();

    let (approved, setApproved) = signal(Option::<String>::None);

    let checkGuard = guard.clone();
    let titleStore = store.clone();
    Effect::new(move |_| {
        let path = pathname.get();
        match checkGuard.check(&path) {
            GuardDecision::Proceed => {
                let key = table
                    .resolve(&path)
                    .map(|entry| entry.view.page().title_key())
                    .unwrap_or("not_found.title");
                titleStore.commit(AppMutation::SetPageTitle(key.to_owned()));
                setApproved.set(Some(path));
            }
            GuardDecision::Redirect(to) => {
                setApproved.set(None);
                navigate(to, Default::default());
            }
        }
    });

    let layoutGuard = guard.clone();
    let content = move || {
        let path = pathname.get();
        let visible = guard.is_public(&path) || approved.get().as_deref() == Some(path.as_str());
        if !visible {
            return view! { <Loading label=store.translate("common.loading") /> }.into_any();
        }
        match table.resolve(&path) {
            Some(entry) if entry.view.is_deferred() => {
                view! { <DeferredView page=entry.view.page() /> }.into_any()
            }
            Some(entry) => render_page(entry.view.page()),
            None => view! { <NotFoundPage /> }.into_any(),
        }
    };

    view! {
        {move || {
            if layoutGuard.is_public(&pathname.get()) {
                view! { <main class="public-content">{content.clone()}</main> }.into_any()
            } else {
                view! {
                    <div class="app-layout">
                        <Nav />
                        <main class="main-content">{content.clone()}</main>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Builds its page after the route has mounted.
#[component]
fn DeferredView(page: Page) -> impl IntoView {
    let store = expect_context::<Store>();
    let (loaded, setLoaded) = signal(false);

    Effect::new(move |_| setLoaded.set(true));

    view! {
        <Show
            when=move || loaded.get()
            fallback=move || view! { <Loading label=store.translate("common.loading") /> }
        >
            {move || render_page(page)}
        </Show>
    }
}
